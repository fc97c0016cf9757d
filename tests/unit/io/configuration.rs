//! Tests for solver constants and defaults

#[cfg(test)]
mod tests {
    use mapcolor::io::configuration::{
        DEFAULT_MAX_COLORS, DEFAULT_PALETTE, DEFAULT_SAMPLE, MAX_PALETTE_SIZE, OUTPUT_SUFFIX,
        PROGRESS_UPDATE_STEPS,
    };
    use mapcolor::maps::samples::SAMPLE_NAMES;

    // Tests the default color count fits the default palette
    // Verified by raising the default count above the palette size
    #[test]
    fn test_default_colors_fit_palette() {
        assert_eq!(DEFAULT_MAX_COLORS, 4);
        assert!(DEFAULT_MAX_COLORS <= DEFAULT_PALETTE.len());
        assert!(DEFAULT_PALETTE.len() <= MAX_PALETTE_SIZE);
    }

    // Tests default palette entries are distinct hex colors
    // Verified by repeating a palette entry
    #[test]
    fn test_default_palette_entries() {
        for (i, color) in DEFAULT_PALETTE.iter().enumerate() {
            assert!(color.starts_with('#') && color.len() == 7, "bad color {color}");
            assert!(!DEFAULT_PALETTE.iter().skip(i + 1).any(|c| c == color));
        }
    }

    // Tests the default sample is a known sample
    // Verified by renaming the default sample
    #[test]
    fn test_default_sample_exists() {
        assert!(SAMPLE_NAMES.contains(&DEFAULT_SAMPLE));
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests progress throttling is active
    // Verified by setting the interval to zero
    #[test]
    fn test_progress_update_interval() {
        assert!(PROGRESS_UPDATE_STEPS > 0);
    }
}
