use std::collections::HashSet;
use std::str::FromStr;

/// Suffix for passthrough columns whose name is already an output column
pub const COLLISION_SUFFIX: &str = "_t1";

/// Which first-table columns are appended to the merged rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PassthroughSpec {
    #[default]
    None,
    /// `*`: every column of the first table
    All,
    /// Comma-separated names, whitespace-trimmed
    Columns(Vec<String>),
}

impl FromStr for PassthroughSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(Self::All);
        }
        let columns: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        if columns.is_empty() {
            Ok(Self::None)
        } else {
            Ok(Self::Columns(columns))
        }
    }
}

/// A passthrough spec projected onto a concrete table schema
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPassthrough {
    /// `(source column index, output column name)` in output order
    pub columns: Vec<(usize, String)>,
    /// Requested names absent from the schema
    pub dropped: Vec<String>,
}

impl PassthroughSpec {
    /// Intersect the spec with `schema`.
    ///
    /// The id column is the join key and already present in the output, so it
    /// is never appended again. Names missing from the schema are dropped and
    /// listed in [`ResolvedPassthrough::dropped`]. Names that clash with
    /// `reserved` output columns get [`COLLISION_SUFFIX`].
    pub fn resolve(&self, schema: &[String], id_column: &str, reserved: &[String]) -> ResolvedPassthrough {
        let requested: Vec<&str> = match self {
            Self::None => return ResolvedPassthrough::default(),
            Self::All => schema.iter().map(String::as_str).collect(),
            Self::Columns(names) => names.iter().map(String::as_str).collect(),
        };

        let mut seen = HashSet::new();
        let mut resolved = ResolvedPassthrough::default();
        for name in requested {
            if name == id_column || !seen.insert(name) {
                continue;
            }
            match schema.iter().position(|h| h == name) {
                Some(index) => {
                    let output_name = if reserved.iter().any(|r| r == name) {
                        format!("{}{}", name, COLLISION_SUFFIX)
                    } else {
                        name.to_string()
                    };
                    resolved.columns.push((index, output_name));
                }
                None => resolved.dropped.push(name.to_string()),
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema() -> Vec<String> {
        ["id", "seq", "name", "evalue"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!("*".parse::<PassthroughSpec>().unwrap(), PassthroughSpec::All);
        assert_eq!(" * ".parse::<PassthroughSpec>().unwrap(), PassthroughSpec::All);
        assert_eq!(
            " name , organism,,".parse::<PassthroughSpec>().unwrap(),
            PassthroughSpec::Columns(vec!["name".into(), "organism".into()])
        );
        assert_eq!(" , ".parse::<PassthroughSpec>().unwrap(), PassthroughSpec::None);
    }

    #[test]
    fn test_wildcard_takes_every_column_but_the_key() {
        let resolved = PassthroughSpec::All.resolve(&schema(), "id", &[]);
        let names: Vec<&str> = resolved.columns.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["seq", "name", "evalue"]);
        assert!(resolved.dropped.is_empty());
    }

    #[test]
    fn test_unknown_names_are_dropped_not_errors() {
        let spec: PassthroughSpec = "name, organism, id, name".parse().unwrap();
        let resolved = spec.resolve(&schema(), "id", &[]);
        assert_eq!(resolved.columns, vec![(2, "name".to_string())]);
        assert_eq!(resolved.dropped, vec!["organism".to_string()]);
    }

    #[test]
    fn test_reserved_names_are_suffixed() {
        let reserved = vec!["evalue".to_string()];
        let resolved = PassthroughSpec::All.resolve(&schema(), "id", &reserved);
        assert_eq!(resolved.columns[2], (3, "evalue_t1".to_string()));
    }

    #[test]
    fn test_none_resolves_to_nothing() {
        assert_eq!(
            PassthroughSpec::None.resolve(&schema(), "id", &[]),
            ResolvedPassthrough::default()
        );
    }
}
