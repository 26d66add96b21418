use std::sync::Arc;

use crate::{
    domain::tts::{BatchReport, BatchServiceApi},
    error::{AppError, AppResult},
    infrastructure::picker::SourcePicker,
};

pub struct BatchController {
    picker: Arc<dyn SourcePicker>,
    batch_service: Arc<dyn BatchServiceApi>,
}

impl BatchController {
    pub fn new(picker: Arc<dyn SourcePicker>, batch_service: Arc<dyn BatchServiceApi>) -> Self {
        Self {
            picker,
            batch_service,
        }
    }

    /// `vocab-tts-batch` takes no arguments
    pub fn check_args<I>(args: I) -> AppResult<()>
    where
        I: IntoIterator<Item = String>,
    {
        match args.into_iter().next() {
            None => Ok(()),
            Some(extra) => Err(AppError::Input(format!(
                "vocab-tts-batch takes no arguments, got '{}'",
                extra
            ))),
        }
    }

    /// Ask for a spreadsheet and process it. `Ok(None)` when cancelled.
    pub async fn run(&self) -> AppResult<Option<BatchReport>> {
        let Some(source) = self.picker.pick().await else {
            tracing::info!("Cancelled, nothing to do");
            return Ok(None);
        };

        let report = self.batch_service.process(&source).await?;

        for failure in &report.failures {
            tracing::warn!(word = %failure.word, error = %failure.error, "Not generated");
        }

        Ok(Some(report))
    }
}
