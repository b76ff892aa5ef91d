use crate::strings::StringKey;

/// Display string provider. Pure lookup, never fails: a missing translation
/// falls back to something displayable.
pub trait StringsPort: Send + Sync {
    fn lookup(&self, key: StringKey) -> String;

    /// Lookup with positional argument interpolation (`%1$s`, `%s`, `%d`).
    fn format(&self, key: StringKey, args: &[&str]) -> String {
        crate::strings::interpolate(&self.lookup(key), args)
    }
}
