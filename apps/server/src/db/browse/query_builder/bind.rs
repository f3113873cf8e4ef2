use super::BindValue;

pub(super) fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

pub(super) fn push_float(bind_params: &mut Vec<BindValue>, value: f64) -> usize {
    bind_params.push(BindValue::Float(value));
    bind_params.len()
}

/// Push every value and return the comma-separated placeholder list.
pub(super) fn push_text_list(bind_params: &mut Vec<BindValue>, values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("${}", push_text(bind_params, v.clone())))
        .collect::<Vec<_>>()
        .join(", ")
}
