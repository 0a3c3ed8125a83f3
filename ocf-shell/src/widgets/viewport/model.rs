/// Widths below this use the collapsible mobile navigation.
pub(crate) const NARROW_NAV_BREAKPOINT: f32 = 768.0;
/// Widths below this render the short brand label.
pub(crate) const COMPACT_BRAND_BREAKPOINT: f32 = 640.0;

/// Navigation layout chosen for the current window width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ViewportMode {
    #[default]
    Desktop,
    Mobile,
}

/// Classification flags derived from the latest measured width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ViewportClass {
    pub(crate) is_narrow_nav: bool,
    pub(crate) is_compact_brand: bool,
}

impl ViewportClass {
    pub(crate) fn mode(&self) -> ViewportMode {
        if self.is_narrow_nav {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }
}

/// Classify a width. An unknown width is treated as desktop with the full
/// brand.
pub(crate) fn classify(width: Option<f32>) -> ViewportClass {
    match width {
        Some(width) => ViewportClass {
            is_narrow_nav: width < NARROW_NAV_BREAKPOINT,
            is_compact_brand: width < COMPACT_BRAND_BREAKPOINT,
        },
        None => ViewportClass::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportClass, ViewportMode, classify};

    #[test]
    fn given_breakpoint_widths_when_classified_then_thresholds_are_exclusive()
    {
        let cases = [
            (1024.0, false, false),
            (768.0, false, false),
            (767.0, true, false),
            (700.0, true, false),
            (640.0, true, false),
            (639.0, true, true),
            (320.0, true, true),
        ];

        for (width, narrow, compact) in cases {
            let class = classify(Some(width));
            assert_eq!(class.is_narrow_nav, narrow, "width {width}");
            assert_eq!(class.is_compact_brand, compact, "width {width}");
        }
    }

    #[test]
    fn given_unknown_width_when_classified_then_desktop_is_assumed() {
        let class = classify(None);

        assert_eq!(class, ViewportClass::default());
        assert_eq!(class.mode(), ViewportMode::Desktop);
    }
}
