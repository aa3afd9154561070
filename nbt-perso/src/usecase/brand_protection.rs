// nbt-perso/src/usecase/brand_protection.rs

use log::info;

use crate::config::GpioFunction;
use crate::constants::{BSK_SLOT, CC_FILE, NDEF_FILE, PP1_FILE, PP2_FILE, PP3_FILE, PP4_FILE};
use crate::content::{BrandProtectionEncoder, ContentEncoder};
use crate::fap::{AccessCondition::{Always, Never}, FileAccessPolicy};
use crate::flows::{personalize_key, write_content};
use crate::transport::Channel;
use crate::usecase::{UseCase, UseCaseConfiguration};
use crate::Result;

/// COTT placeholder the verification backend substitutes at read time.
pub const COTT_PLACEHOLDER: &str = "PLACEHOLDERPLACEHOLDERPLACEHOLDERPLACEHOLDER";

/// Base URL used when the caller does not supply one.
pub const DEFAULT_COTT_BASE_URL: &str = "http://www.infineon.com/";

/// Brand-protection profile: the tag carries a COTT verification link and
/// the product certificate, signs challenges with the brand signing key,
/// and afterwards only the contact interface may read the files.
#[derive(Debug, Clone)]
pub struct BrandProtection {
    encoder: BrandProtectionEncoder,
    key: Vec<u8>,
}

impl BrandProtection {
    /// `url` is the verification base URL; the COTT query parameter with
    /// its placeholder is appended here. Certificate and key are DER
    /// bytes, typically from
    /// [`utils::certificate_from_pem`](crate::utils::certificate_from_pem)
    /// and [`utils::key_from_pem`](crate::utils::key_from_pem).
    pub fn new(url: Option<&str>, certificate: Vec<u8>, key: Vec<u8>) -> Result<Self> {
        let full_url = format!(
            "{}?cott={}",
            url.unwrap_or(DEFAULT_COTT_BASE_URL),
            COTT_PLACEHOLDER
        );
        Ok(Self {
            encoder: BrandProtectionEncoder::new(full_url, certificate)?,
            key,
        })
    }

    /// Full verification URL written to the tag, placeholder included.
    pub fn url(&self) -> &str {
        self.encoder.url()
    }

    fn configuration() -> Result<UseCaseConfiguration> {
        UseCaseConfiguration::builder()
            .cc_policy(FileAccessPolicy::new(CC_FILE, Never, Never, Always, Never))
            .content_policy(FileAccessPolicy::new(NDEF_FILE, Never, Never, Always, Never))
            .file1_policy(FileAccessPolicy::locked(PP1_FILE))
            .file2_policy(FileAccessPolicy::locked(PP2_FILE))
            .file3_policy(FileAccessPolicy::locked(PP3_FILE))
            .file4_policy(FileAccessPolicy::locked(PP4_FILE))
            .gpio(GpioFunction::Disabled)
            .build()
    }
}

impl UseCase for BrandProtection {
    fn execute(&self, channel: &mut dyn Channel) -> Result<()> {
        info!("personalizing for brand protection");
        personalize_key(channel, BSK_SLOT, &self.key)?;
        write_content(channel, &self.encoder.encode()?)?;
        Self::configuration()?.apply(channel)
    }
}
