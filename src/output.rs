/// A text region the form writes its results into.
pub trait DisplaySurface {
    /// Replaces the whole content of the region.
    fn replace_all(&mut self, text: &str);

    /// Enables or disables user editing of the region.
    fn set_editable(&mut self, editable: bool);
}

/// The in-memory output region bound by the front end.
///
/// Rejects writes while disabled, so the only way to change its content is
/// through [`Unlocked`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRegion {
    content: String,
    editable: bool,
}

impl OutputRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }
}

impl DisplaySurface for OutputRegion {
    fn replace_all(&mut self, text: &str) {
        if !self.editable {
            log::warn!("dropped write to a read-only output region");
            return;
        }
        self.content.clear();
        self.content.push_str(text);
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }
}

/// Keeps a display surface editable for as long as it lives.
///
/// The surface is switched back to read-only on drop.
pub struct Unlocked<'a, D: DisplaySurface + ?Sized> {
    surface: &'a mut D,
}

impl<'a, D: DisplaySurface + ?Sized> Unlocked<'a, D> {
    pub fn enter(surface: &'a mut D) -> Self {
        surface.set_editable(true);
        Self { surface }
    }

    pub fn replace_all(&mut self, text: &str) {
        self.surface.replace_all(text);
    }
}

impl<D: DisplaySurface + ?Sized> Drop for Unlocked<'_, D> {
    fn drop(&mut self) {
        self.surface.set_editable(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_starts_empty_and_read_only() {
        let region = OutputRegion::new();
        assert_eq!(region.content(), "");
        assert!(!region.is_editable());
    }

    #[test]
    fn read_only_region_ignores_writes() {
        let mut region = OutputRegion::new();
        region.replace_all("nope");
        assert_eq!(region.content(), "");
    }

    #[test]
    fn unlocked_writes_and_relocks() {
        let mut region = OutputRegion::new();
        {
            let mut out = Unlocked::enter(&mut region);
            out.replace_all("first");
            out.replace_all("second");
        }

        assert_eq!(region.content(), "second");
        assert!(!region.is_editable());
    }
}
