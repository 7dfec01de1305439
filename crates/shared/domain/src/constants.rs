//! Domain-level constants.
//!
//! These constants define business rules and the column sizes of the
//! persisted schema.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// Paying subscriber role
pub const ROLE_PREMIUM: &str = "premium";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN, ROLE_PREMIUM];

// =============================================================================
// Media
// =============================================================================

/// Stored value for video media
pub const MEDIA_TYPE_VIDEO: &str = "video";

/// Stored value for image media
pub const MEDIA_TYPE_IMAGE: &str = "imagen";

/// All valid media type values
pub const VALID_MEDIA_TYPES: &[&str] = &[MEDIA_TYPE_VIDEO, MEDIA_TYPE_IMAGE];

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Column sizes
// =============================================================================

pub const EMAIL_MAX_LENGTH: u32 = 50;
pub const PASSWORD_HASH_MAX_LENGTH: u32 = 255;
pub const ALIAS_MAX_LENGTH: u32 = 50;
pub const LASTNAME_MAX_LENGTH: u32 = 50;
pub const PHONE_MAX_LENGTH: u32 = 20;
pub const ADDRESS_MAX_LENGTH: u32 = 100;
pub const COUNTRY_MAX_LENGTH: u32 = 25;
pub const CITY_MAX_LENGTH: u32 = 50;
pub const ZIP_CODE_MAX_LENGTH: u32 = 10;
pub const ROLE_MAX_LENGTH: u32 = 16;

pub const TITLE_MAX_LENGTH: u32 = 100;
pub const COMPANY_MAX_LENGTH: u32 = 100;
pub const PLATFORM_NAME_MAX_LENGTH: u32 = 100;
pub const GENRE_NAME_MAX_LENGTH: u32 = 50;

/// URLs, file names and tokens
pub const LONG_TEXT_MAX_LENGTH: u32 = 255;
pub const FILETYPE_MAX_LENGTH: u32 = 50;
pub const MEDIA_TYPE_MAX_LENGTH: u32 = 16;

pub const PROVIDER_MAX_LENGTH: u32 = 50;
pub const SOCIAL_ID_MAX_LENGTH: u32 = 100;
pub const OFFER_ID_MAX_LENGTH: u32 = 100;

/// Price column precision and scale
pub const PRICE_PRECISION: u32 = 10;
pub const PRICE_SCALE: u32 = 2;
