#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use texrip_geometry as geometry;

#[doc(inline)]
pub use texrip_image as image;

#[doc(inline)]
pub use texrip_imgproc as imgproc;

#[doc(inline)]
pub use texrip_area as area;
