use anyhow::{anyhow, Context};
use async_trait::async_trait;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};

/// Source of the words to synthesize in batch mode.
#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// Values of the first column, in row order. Blank cells are `None`.
    async fn first_column(&self, source: &Path) -> Result<Vec<Option<String>>, String>;
}

/// Reads the first worksheet of an Excel/ODS workbook with calamine
pub struct ExcelVocabularyRepository {
    skip_header: bool,
}

impl ExcelVocabularyRepository {
    pub fn new(skip_header: bool) -> Self {
        Self { skip_header }
    }

    fn read_first_column(path: &Path, skip_header: bool) -> anyhow::Result<Vec<Option<String>>> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| anyhow!("{} contains no worksheet", path.display()))?
            .with_context(|| format!("failed to read first worksheet of {}", path.display()))?;

        let (_, width) = range.get_size();
        if width == 0 {
            return Err(anyhow!("{} has no columns", path.display()));
        }

        Ok(first_column_of(&range, skip_header))
    }
}

/// Column A of the sheet, one entry per row of the used range.
///
/// calamine trims the range to the used cells, so when column A is blank
/// throughout the range starts further right and every entry is `None`.
fn first_column_of(range: &Range<Data>, skip_header: bool) -> Vec<Option<String>> {
    let starts_at_column_a = matches!(range.start(), Some((_, 0)));

    range
        .rows()
        .skip(usize::from(skip_header))
        .map(|row| {
            if starts_at_column_a {
                row.first().and_then(cell_text)
            } else {
                None
            }
        })
        .collect()
}

/// Text of a cell, `None` for blank and error cells
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl VocabularyRepository for ExcelVocabularyRepository {
    async fn first_column(&self, source: &Path) -> Result<Vec<Option<String>>, String> {
        let path: PathBuf = source.to_path_buf();
        let skip_header = self.skip_header;

        let words = tokio::task::spawn_blocking(move || Self::read_first_column(&path, skip_header))
            .await
            .map_err(|e| format!("spreadsheet reader stopped: {}", e))?
            .map_err(|e| format!("{:#}", e))?;

        tracing::info!(
            source = %source.display(),
            rows = words.len(),
            skip_header,
            "Word list loaded"
        );

        Ok(words)
    }
}
