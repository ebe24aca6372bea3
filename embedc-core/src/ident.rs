/// Identifier derived from an input path, naming the generated symbols.
///
/// Derivation takes the final `/`-separated segment of the path and
/// replaces every `.` with `_`. Only `/` counts as a separator; build
/// scripts reference the generated symbols by name, so the convention
/// is fixed and must not be generalized to other separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    name: String,
}

impl Ident {
    pub fn from_path(path: &str) -> Self {
        let segment = match path.rfind('/') {
            Some(i) => &path[i + 1..],
            None => path,
        };
        Ident {
            name: segment.replace('.', "_"),
        }
    }

    /// Include-guard macro name, e.g. `__STDLIB_C__`.
    pub fn guard(&self) -> String {
        format!("__{}__", self.name.to_uppercase())
    }

    /// Name of the emitted constant, e.g. `embed_stdlib_c`.
    pub fn constant(&self) -> String {
        format!("embed_{}", self.name)
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}
