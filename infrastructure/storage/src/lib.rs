pub mod image_encoder;
pub mod upload_store;

pub use image_encoder::ImageEncoderFs;
pub use upload_store::UploadStoreFs;
