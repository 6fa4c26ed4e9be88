use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Referans dosyasında geçerli veri bulunamadı")]
    NoReferenceData,

    #[error("Kategorize edilecek dosyada geçerli veri bulunamadı")]
    NoTargetData,

    #[error("Sonuç dosyası oluşturulamadı: {0}")]
    Assembly(#[from] categorix_document::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
