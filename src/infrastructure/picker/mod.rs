use async_trait::async_trait;
use std::path::PathBuf;

/// Supplies the spreadsheet to process. `None` means the user cancelled.
#[async_trait]
pub trait SourcePicker: Send + Sync {
    async fn pick(&self) -> Option<PathBuf>;
}

/// Native "open file" dialog limited to spreadsheets
pub struct DialogSourcePicker;

#[async_trait]
impl SourcePicker for DialogSourcePicker {
    async fn pick(&self) -> Option<PathBuf> {
        tracing::info!("Waiting for a spreadsheet to be selected");

        let picked = rfd::AsyncFileDialog::new()
            .set_title("Select a word list")
            .add_filter("Spreadsheets", &["xlsx", "xlsm", "xls", "ods"])
            .add_filter("All files", &["*"])
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf());

        match &picked {
            Some(path) => tracing::info!(path = %path.display(), "Spreadsheet selected"),
            None => tracing::info!("No spreadsheet selected"),
        }
        picked
    }
}

/// Path fixed up front, e.g. from `BATCH_SOURCE_PATH`
pub struct FixedSourcePicker {
    path: PathBuf,
}

impl FixedSourcePicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SourcePicker for FixedSourcePicker {
    async fn pick(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
