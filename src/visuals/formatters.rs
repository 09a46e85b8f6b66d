use crate::document::UniversityRecord;

pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_share(part: usize, total: usize) -> String {
    if total == 0 {
        "0.0%".to_string()
    } else {
        format!("{:.1}%", (part as f64 / total as f64) * 100.0)
    }
}

pub fn format_record(record: Option<&UniversityRecord>) -> (String, String) {
    match record {
        Some(r) => (r.id.to_string(), r.name.clone()),
        None => ("-".to_string(), "-".to_string()),
    }
}
