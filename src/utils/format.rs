use chrono::{DateTime, Utc};

pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %e, %Y %H:%M").to_string()
}

/// Name for the archive a download saves as: the uploaded file's stem
/// (everything before the first dot) plus a fixed suffix.
pub fn download_file_name(original_filename: &str) -> String {
    let stem = original_filename
        .split('.')
        .next()
        .unwrap_or(original_filename);
    format!("{}_labels.zip", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_sizes_pick_the_right_unit() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(1_536_000), "1.5 MB");
    }

    #[test]
    fn boundary_just_below_a_kilobyte_stays_in_bytes() {
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
    }

    #[test]
    fn download_name_uses_stem_before_first_dot() {
        assert_eq!(download_file_name("labels.csv"), "labels_labels.zip");
        assert_eq!(download_file_name("inventory.2024.xlsx"), "inventory_labels.zip");
        assert_eq!(download_file_name("data"), "data_labels.zip");
    }

    #[test]
    fn timestamps_render_readably() {
        let ts = Utc.with_ymd_and_hms(2025, 7, 2, 17, 48, 13).unwrap();
        assert_eq!(format_timestamp(&ts), "Jul  2, 2025 17:48");
    }
}
