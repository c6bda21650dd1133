use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalendarError>;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Repository list error: {0}")]
    RepoList(String),
    #[error("Scan error: {0}")]
    Scan(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for CalendarError {
    fn from(err: gix::open::Error) -> Self {
        CalendarError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for CalendarError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        CalendarError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for CalendarError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        CalendarError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for CalendarError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        CalendarError::HeadPeel(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for CalendarError {
    fn from(err: gix::objs::decode::Error) -> Self {
        CalendarError::ObjectDecode(Box::new(err))
    }
}
