use std::path::Path;

/// Read GPU utilisation from the Linux DRM sysfs interface.
///
/// Returns the busy percentage of the first card exposing
/// `gpu_busy_percent` (amdgpu, some i915 builds), or `None` if no card does.
pub fn read_gpu_busy() -> Option<f32> {
    read_gpu_busy_from(Path::new("/sys/class/drm"))
}

pub(crate) fn read_gpu_busy_from(drm: &Path) -> Option<f32> {
    for name in ["card0", "card1", "card2", "card3"] {
        let file = drm.join(name).join("device").join("gpu_busy_percent");
        let Ok(raw) = std::fs::read_to_string(&file) else {
            continue;
        };
        if let Some(pct) = parse_busy_percent(&raw) {
            return Some(pct);
        }
    }
    None
}

fn parse_busy_percent(raw: &str) -> Option<f32> {
    let pct = raw.trim().parse::<f32>().ok()?;
    pct.is_finite().then(|| pct.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sysfs_value() {
        assert_eq!(parse_busy_percent("37\n"), Some(37.0));
        assert_eq!(parse_busy_percent("250"), Some(100.0));
        assert_eq!(parse_busy_percent("busy"), None);
    }

    #[test]
    fn reads_first_card_with_counter() {
        let root = std::env::temp_dir().join(format!("hwmon-drm-{}", std::process::id()));
        let device = root.join("card1").join("device");
        std::fs::create_dir_all(&device).unwrap();
        std::fs::write(device.join("gpu_busy_percent"), "42\n").unwrap();

        assert_eq!(read_gpu_busy_from(&root), Some(42.0));
        assert_eq!(read_gpu_busy_from(&root.join("missing")), None);

        std::fs::remove_dir_all(&root).unwrap();
    }
}
