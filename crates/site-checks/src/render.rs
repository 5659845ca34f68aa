//! Panel rendering: catalog-ordered rows, status classes, and escaping.

use serde::Serialize;

use crate::catalog::CRITERIA;
use crate::types::{CheckList, CheckResult, CheckStatus};

/// Static notice shown when the evaluation could not be completed.
pub const FAILURE_TEXT: &str = "8대 체크 분석 실패 (추가 확인 필요)";

/// Visual class of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Pass,
    Fail,
    Warn,
}

impl StatusClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Pass => "pass",
            StatusClass::Fail => "fail",
            StatusClass::Warn => "warn",
        }
    }
}

impl From<StatusClass> for CheckStatus {
    fn from(class: StatusClass) -> Self {
        match class {
            StatusClass::Pass => CheckStatus::Pass,
            StatusClass::Fail => CheckStatus::Fail,
            StatusClass::Warn => CheckStatus::Warning,
        }
    }
}

/// Map a status onto its visual class. Everything that is not exactly
/// `PASS` or `FAIL` is `warn`.
pub fn classify(status: &CheckStatus) -> StatusClass {
    match status {
        CheckStatus::Pass => StatusClass::Pass,
        CheckStatus::Fail => StatusClass::Fail,
        CheckStatus::Warning | CheckStatus::Unrecognized(_) => StatusClass::Warn,
    }
}

/// One rendered criterion. `value` and `message` are unescaped here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub key: &'static str,
    pub title: &'static str,
    pub class: StatusClass,
    pub value: String,
    pub message: String,
}

/// Build exactly one row per catalog criterion, in catalog order.
pub fn build_rows(list: &CheckList) -> Vec<PanelRow> {
    CRITERIA
        .iter()
        .map(|criterion| {
            let result = list
                .get(criterion.key)
                .cloned()
                .unwrap_or_else(CheckResult::needs_verification);
            PanelRow {
                key: criterion.key,
                title: criterion.title,
                class: classify(&result.status),
                value: result.value,
                message: result.message,
            }
        })
        .collect()
}

/// Serialize rows to panel markup.
pub fn render_rows(rows: &[PanelRow]) -> String {
    let mut html = String::new();
    for row in rows {
        html.push_str(&format!(
            "<div class=\"checkRow {}\">\
             <div class=\"checkTitle\">{}</div>\
             <div class=\"checkValue\">{}</div>\
             <div class=\"checkMsg\">{}</div>\
             </div>",
            row.class.as_str(),
            row.title,
            escape_html(&row.value),
            escape_html(&row.message),
        ));
    }
    html
}

/// Markup that replaces the whole panel on failure.
pub fn failure_notice() -> String {
    format!("<div style=\"padding:14px;color:#ffcc66;\">{FAILURE_TEXT}</div>")
}

/// Escape `& < > " '` for element text content. Nothing else is touched.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: CheckStatus, value: &str, message: &str) -> CheckResult {
        CheckResult {
            status,
            value: value.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_classify_total() {
        assert_eq!(classify(&CheckStatus::Pass), StatusClass::Pass);
        assert_eq!(classify(&CheckStatus::Fail), StatusClass::Fail);
        assert_eq!(classify(&CheckStatus::Warning), StatusClass::Warn);
        assert_eq!(
            classify(&CheckStatus::Unrecognized("OK".to_string())),
            StatusClass::Warn
        );
    }

    #[test]
    fn test_classify_idempotent() {
        let statuses = [
            CheckStatus::Pass,
            CheckStatus::Fail,
            CheckStatus::Warning,
            CheckStatus::Unrecognized("N/A".to_string()),
        ];
        for status in statuses {
            let once = classify(&status);
            let twice = classify(&CheckStatus::from(once));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_other_text() {
        assert_eq!(escape_html("경사도 12° / 100%"), "경사도 12° / 100%");
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let mut list = CheckList::new();
        list.insert("land_price", result(CheckStatus::Pass, "32,000원/㎡", ""));
        list.insert("zoning", result(CheckStatus::Fail, "보전관리", "개발 제한"));

        let rows = build_rows(&list);
        let keys: Vec<_> = rows.iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            ["zoning", "ecology", "heritage", "setback", "grid", "slope", "insolation", "land_price"]
        );
        assert_eq!(rows[0].class, StatusClass::Fail);
        assert_eq!(rows[7].class, StatusClass::Pass);
    }

    #[test]
    fn test_missing_heritage_defaults() {
        let rows = build_rows(&CheckList::new());
        let heritage = rows.iter().find(|r| r.key == "heritage").unwrap();
        assert_eq!(heritage.value, crate::types::DEFAULT_VALUE_TEXT);
        assert_eq!(heritage.class, StatusClass::Warn);
        assert!(heritage.message.is_empty());
    }

    #[test]
    fn test_falsy_entries_get_default_text() {
        let list = CheckList::from_value(&serde_json::json!({
            "heritage": false,
            "grid": 0,
            "slope": ""
        }));
        let rows = build_rows(&list);
        for key in ["heritage", "grid", "slope"] {
            let row = rows.iter().find(|r| r.key == key).unwrap();
            assert_eq!(row.value, crate::types::DEFAULT_VALUE_TEXT, "{key}");
            assert_eq!(row.class, StatusClass::Warn);
        }
    }

    #[test]
    fn test_render_escapes_untrusted_text() {
        let mut list = CheckList::new();
        list.insert(
            "slope",
            result(CheckStatus::Pass, "<script>alert(1)</script>", "a & \"b\" 'c'"),
        );
        let html = render_rows(&build_rows(&list));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; &quot;b&quot; &#39;c&#39;"));
    }

    #[test]
    fn test_render_eight_rows() {
        let html = render_rows(&build_rows(&CheckList::new()));
        assert_eq!(html.matches("class=\"checkRow ").count(), 8);
        assert_eq!(html.matches("checkRow warn").count(), 8);
    }

    #[test]
    fn test_failure_notice_is_static() {
        assert!(failure_notice().contains(FAILURE_TEXT));
    }
}
