// End-to-end tests for the single-text and batch pipelines
//
// The cloud TTS provider, the audio device and the spreadsheet reader are
// replaced with in-memory fakes (see helpers). Everything else runs for real:
// filename derivation, the on-disk cache under a temporary directory, and the
// services and controllers wired as the binaries wire them.

mod helpers;
mod test_batch;
mod test_speak;
