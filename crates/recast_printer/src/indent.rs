//! Nesting depth and padding.
//!
//! [`Indent`] is a plain value passed down the recursion, so a nested render
//! can never leave the caller's depth changed. [`Layout`] turns a depth into
//! a padding slice, capped at a configured width.

use recast_config::FormatConfig;

/// Widest padding any layout can produce.
pub const MAX_PADDING: usize = 256;

const SPACES: &str = concat!(
    "                                                                ",
    "                                                                ",
    "                                                                ",
    "                                                                ",
);

/// A nesting depth.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Indent(usize);

impl Indent {
    /// The depth of a top-level construct.
    pub const ROOT: Indent = Indent(0);

    /// Creates an indent at the given depth.
    pub fn new(depth: usize) -> Self {
        Self(depth)
    }

    /// Returns the nesting depth.
    pub fn depth(self) -> usize {
        self.0
    }

    /// Returns the indent `n` levels deeper.
    pub fn increase(self, n: usize) -> Self {
        Self(self.0.saturating_add(n))
    }

    /// Returns the indent `n` levels shallower, stopping at the root.
    pub fn decrease(self, n: usize) -> Self {
        Self(self.0.saturating_sub(n))
    }

    /// Returns the indent one level deeper.
    pub fn deeper(self) -> Self {
        self.increase(1)
    }
}

/// Converts nesting depth into padding.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    tab_width: usize,
    max_indent: usize,
}

impl Layout {
    /// Creates a layout. The cap is clamped to `1..=`[`MAX_PADDING`] and the
    /// tab width to at least one space.
    pub fn new(tab_width: usize, max_indent: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
            max_indent: max_indent.clamp(1, MAX_PADDING),
        }
    }

    /// Returns the widest padding this layout emits.
    pub fn max_indent(&self) -> usize {
        self.max_indent
    }

    /// Returns the padding width `indent` asks for, before capping.
    pub fn width(&self, indent: Indent) -> usize {
        indent.depth().saturating_mul(self.tab_width)
    }

    /// Returns `true` if `indent` asks for more padding than the cap allows.
    pub fn overflows(&self, indent: Indent) -> bool {
        self.width(indent) > self.max_indent
    }

    /// Returns the padding for `indent`, saturating at the cap.
    pub fn padding(&self, indent: Indent) -> &'static str {
        let width = self.width(indent).min(self.max_indent);
        &SPACES[..width]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from(&FormatConfig::default())
    }
}

impl From<&FormatConfig> for Layout {
    fn from(config: &FormatConfig) -> Self {
        Self::new(config.tab_width, config.max_indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_buffer_covers_max_padding() {
        assert_eq!(SPACES.len(), MAX_PADDING);
        assert!(SPACES.bytes().all(|b| b == b' '));
    }

    #[test]
    fn default_layout_is_four_spaces_capped_at_eighty() {
        let layout = Layout::default();
        assert_eq!(layout.padding(Indent::ROOT), "");
        assert_eq!(layout.padding(Indent::new(1)), "    ");
        assert_eq!(layout.padding(Indent::new(3)).len(), 12);
        assert_eq!(layout.padding(Indent::new(20)).len(), 80);
        assert!(!layout.overflows(Indent::new(20)));
    }

    #[test]
    fn padding_saturates_past_the_cap() {
        let layout = Layout::default();
        assert!(layout.overflows(Indent::new(21)));
        assert_eq!(layout.padding(Indent::new(21)).len(), 80);
        assert_eq!(layout.padding(Indent::new(usize::MAX)).len(), 80);
    }

    #[test]
    fn custom_tab_width() {
        let layout = Layout::new(2, 10);
        assert_eq!(layout.padding(Indent::new(3)), "      ");
        assert_eq!(layout.padding(Indent::new(6)).len(), 10);
    }

    #[test]
    fn layout_clamps_its_inputs() {
        let layout = Layout::new(0, 10_000);
        assert_eq!(layout.max_indent(), MAX_PADDING);
        assert_eq!(layout.padding(Indent::new(2)), "  ");
    }

    #[test]
    fn indent_arithmetic_saturates() {
        let indent = Indent::ROOT.deeper().increase(2);
        assert_eq!(indent.depth(), 3);
        assert_eq!(indent.decrease(5), Indent::ROOT);
        assert_eq!(Indent::new(usize::MAX).deeper().depth(), usize::MAX);
    }
}
