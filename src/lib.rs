#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for generating placeholder PNG images.
//!
//! The PNG side of things ([`png`]) only knows how to pack chunks and wrap a
//! buffer of filtered scanlines into a valid PNG datastream. What the pixels
//! actually look like is decided by [`paint`], and the fixed list of files
//! that a web project wants is kept in [`assets`].

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod pixel_formats;
pub use pixel_formats::*;

pub mod ascii_array;
pub use ascii_array::*;

mod error;
pub use error::*;

pub mod png;

pub mod paint;
pub use paint::{create_png, Finish, ImageDescriptor};

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub mod assets;
