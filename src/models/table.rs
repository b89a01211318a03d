use crate::error::{ProcessingError, Result};

/// Raw tabular data: one header row and string cells, addressed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl LocationTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Rows shorter than the header are padded with empty cells.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        if row.len() < self.headers.len() {
            row.resize(self.headers.len(), String::new());
        }
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Fails with a schema error naming every absent column.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProcessingError::Schema { missing })
        }
    }

    /// Cell lookup by row position and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)
            .and_then(|r| r.get(index))
            .map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |r| r[index].as_str()))
    }

    /// Exchanges two header labels; cells stay where they are.
    pub fn swap_labels(&mut self, a: &str, b: &str) -> Result<()> {
        let ia = self
            .column_index(a)
            .ok_or_else(|| ProcessingError::Schema {
                missing: vec![a.to_string()],
            })?;
        let ib = self
            .column_index(b)
            .ok_or_else(|| ProcessingError::Schema {
                missing: vec![b.to_string()],
            })?;
        self.headers.swap(ia, ib);
        Ok(())
    }

    /// Replaces every cell of a column through `f`.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&str) -> String,
    {
        let index = self
            .column_index(name)
            .ok_or_else(|| ProcessingError::Schema {
                missing: vec![name.to_string()],
            })?;
        for row in &mut self.rows {
            row[index] = f(&row[index]);
        }
        Ok(())
    }

    /// Keeps rows whose mask entry is true, in order.
    pub fn retain_mask(&mut self, mask: &[bool]) {
        debug_assert_eq!(mask.len(), self.rows.len());
        let mut keep = mask.iter().copied();
        self.rows.retain(|_| keep.next().unwrap_or(false));
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.headers, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_table() -> LocationTable {
        let mut table = LocationTable::new(
            ["Serial", "Latitude", "Longitude", "Type"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        table.push_row(vec!["PI1".into(), "-3.0".into(), "55.0".into(), "Soil".into()]);
        table.push_row(vec!["PI2".into(), "0.1".into(), "51.0".into()]);
        table
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = sample_table();
        assert_eq!(table.cell(1, "Type"), Some(""));
    }

    #[test]
    fn test_require_columns_lists_all_missing() {
        let table = sample_table();
        assert!(table.require_columns(&["Serial", "Latitude"]).is_ok());

        match table.require_columns(&["Serial", "Code", "Name"]) {
            Err(ProcessingError::Schema { missing }) => {
                assert_eq!(missing, vec!["Code".to_string(), "Name".to_string()])
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_swap_labels_leaves_cells() {
        let mut table = sample_table();
        table.swap_labels("Latitude", "Longitude").unwrap();

        assert_eq!(table.headers(), &["Serial", "Longitude", "Latitude", "Type"]);
        assert_eq!(table.cell(0, "Latitude"), Some("55.0"));
        assert_eq!(table.cell(0, "Longitude"), Some("-3.0"));
    }

    #[test]
    fn test_retain_mask_preserves_order() {
        let mut table = sample_table();
        table.push_row(vec!["PI3".into(), "1".into(), "2".into(), "x".into()]);
        table.retain_mask(&[true, false, true]);

        let serials: Vec<&str> = table.column("Serial").unwrap().collect();
        assert_eq!(serials, vec!["PI1", "PI3"]);
    }

    #[test]
    fn test_map_column() {
        let mut table = sample_table();
        table.map_column("Serial", |s| s.to_lowercase()).unwrap();
        assert_eq!(table.cell(1, "Serial"), Some("pi2"));
        assert!(table.map_column("Missing", |s| s.to_string()).is_err());
    }
}
