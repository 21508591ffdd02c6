use accordion::AccordionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("story failed to build: {0}")]
    Accordion(#[from] AccordionError),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("no stories to show")]
    NoStories,
}
