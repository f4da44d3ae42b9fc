/// Fixed instruction sent with every photo
pub const ANALYSIS_PROMPT: &str = "Give a Skin Health Analysis and, based on the analysis, \
offer tailored skincare product recommendations and provide a personalized skincare plan. \
Warnings/Alerts: If any serious skin issues are detected, call them out explicitly.";

/// Build the prompt, appending a non-empty addendum verbatim on its own line
pub fn build_prompt(extra: &str) -> String {
    if extra.is_empty() {
        ANALYSIS_PROMPT.to_string()
    } else {
        format!("{ANALYSIS_PROMPT}\n{extra}")
    }
}
