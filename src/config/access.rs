use super::*;

impl YConf {
    /// Get a typed value using its dotted path.
    ///
    /// Automatically handles both `snake_case` and `kebab-case` segments.
    ///
    /// # Examples
    /// ```no_run
    /// # use yconf::YConf;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = YConf::from_file("config.txt");
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let debug: bool = config.get("debug")?;
    /// let weights: Vec<f64> = config.get("model.weights")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be
    /// converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, YConfError>
    where
        T: TryFrom<Value, Error = YConfError>,
    {
        let entry = helpers::find_flexible(&self.document, path).ok_or_else(|| not_found(path))?;
        T::try_from(entry.value.clone()).map_err(|e| with_line(e, path, entry))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, YConfError>
    where
        T: TryFrom<Value, Error = YConfError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(YConfError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```
    /// # use yconf::YConf;
    /// let config = YConf::from_str("server:\n  timeout: 5");
    /// assert_eq!(config.get_or("server.timeout", 30i64), 5);
    /// assert_eq!(config.get_or("server.retries", 3i64), 3);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = YConfError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Exact-path lookup.
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        self.document.get(path)
    }

    pub fn entry(&self, path: &str) -> Option<&Entry> {
        self.document.entries.get(path)
    }

    /// Check if a configuration path has a value.
    pub fn has(&self, path: &str) -> bool {
        helpers::find_flexible(&self.document, path).is_some()
    }

    /// Names directly beneath `prefix`; an empty prefix lists the top level.
    ///
    /// Only paths that carry a value (or have descendants that do) appear.
    ///
    /// # Examples
    /// ```
    /// # use yconf::YConf;
    /// let config = YConf::from_str("server:\n  host: \"h\"\n  tls:\n    on: TRUE");
    /// assert_eq!(config.get_keys("server"), vec!["host", "tls"]);
    /// ```
    pub fn get_keys(&self, prefix: &str) -> Vec<String> {
        helpers::child_segments(&self.document, prefix)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.document.entries.keys().map(String::as_str)
    }

    /// All `(path, value)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.document
            .entries
            .iter()
            .map(|(path, entry)| (path.as_str(), &entry.value))
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.document.entries.values()
    }

    pub fn len(&self) -> usize {
        self.document.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a YConf {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn not_found(path: &str) -> YConfError {
    YConfError::NotFound {
        path: path.to_string(),
        hint: Some("Check that the path exists in your config file".into()),
        code: Some(304),
    }
}

/// Point type errors at the line the value came from.
fn with_line(e: YConfError, path: &str, entry: &Entry) -> YConfError {
    match e {
        YConfError::TypeError { message, hint, code, .. } => YConfError::TypeError {
            message: format!("{} for `{}`\n  → {}: {}", message, path, entry.path, entry.raw),
            line: entry.line,
            hint,
            code,
        },
        other => other,
    }
}
