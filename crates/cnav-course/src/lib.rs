//! Course read model for the cnav navigation engine.
//!
//! This crate defines the slice of course configuration that tab
//! resolution reads: the course identity, the flags that gate individual
//! tabs, and the three textbook shelves that collection tabs expand into.
//!
//! The types here carry no behavior beyond construction helpers. Loading
//! a course from a store and keeping it current is the embedder's
//! concern.
//!
//! # Example
//!
//! ```
//! use cnav_course::{Course, CourseKey};
//!
//! let course = Course::new(CourseKey::new("org/course/run"), "Demo Course")
//!     .with_textbook("Volume 1")
//!     .with_textbook("Volume 2");
//! assert_eq!(course.textbooks.len(), 2);
//! ```

mod course;
mod textbook;

pub use course::{Course, CourseKey};
pub use textbook::{HtmlTextbook, PdfTextbook, Textbook};
