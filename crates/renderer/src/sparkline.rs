const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Map `value` onto one of eight block glyphs within `[min, max]`.
pub fn glyph(value: f32, min: f32, max: f32) -> char {
    let span = max - min;
    if !(span > 0.0) || !value.is_finite() {
        return BLOCKS[0];
    }
    let t = ((value - min) / span).clamp(0.0, 1.0);
    let idx = (t * (BLOCKS.len() - 1) as f32).round() as usize;
    BLOCKS[idx.min(BLOCKS.len() - 1)]
}

/// Render `data` into exactly `width` glyphs.
///
/// Longer series are bucketed (each column shows its bucket's peak) and
/// shorter ones are right-aligned with blank padding, so the newest sample
/// always sits in the last column.
pub fn render(data: &[f32], width: usize, min: f32, max: f32) -> String {
    if width == 0 {
        return String::new();
    }
    if data.len() <= width {
        let pad = width - data.len();
        return std::iter::repeat(' ')
            .take(pad)
            .chain(data.iter().map(|&v| glyph(v, min, max)))
            .collect();
    }

    (0..width)
        .map(|col| {
            let start = col * data.len() / width;
            let end = ((col + 1) * data.len() / width).max(start + 1);
            let peak = data[start..end].iter().copied().fold(f32::MIN, f32::max);
            glyph(peak, min, max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_spans_scale() {
        assert_eq!(glyph(0.0, 0.0, 100.0), '▁');
        assert_eq!(glyph(100.0, 0.0, 100.0), '█');
        assert_eq!(glyph(250.0, 0.0, 100.0), '█');
        assert_eq!(glyph(-5.0, 0.0, 100.0), '▁');
    }

    #[test]
    fn short_series_is_right_aligned() {
        assert_eq!(render(&[0.0, 100.0], 4, 0.0, 100.0), "  ▁█");
    }

    #[test]
    fn long_series_is_bucketed_to_width() {
        let data: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let line = render(&data, 10, 0.0, 99.0);
        assert_eq!(line.chars().count(), 10);
        assert_eq!(line.chars().last(), Some('█'));
    }
}
