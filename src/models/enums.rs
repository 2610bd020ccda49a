//! Enumerated text values shared by models and stored as TEXT columns

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

/// Defines a string-backed enum with `as_str`, `FromStr`, `Display` and
/// sqlx TEXT conversions.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($name), s)),
                }
            }
        }

        impl sqlx::Type<Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s: &str = Decode::<Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as Encode<Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

text_enum! {
    /// Booking lifecycle status
    BookingStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

text_enum! {
    /// Services a customer can book
    ServiceCode {
        NeonTattoo => "neon_tattoo",
        GlitterHairSpray => "glitter_hair_spray",
        GlitterFaceArt => "glitter_face_art",
        GlitterEyeArt => "glitter_eye_art",
        BoldStoneDesigns => "bold_stone_designs",
        UvBodyPaint => "uv_body_paint",
        BodyJewels => "body_jewels",
        TemporaryTattoosPremium => "temporary_tattoos_premium",
        FestivalFaceGems => "festival_face_gems",
    }
}

text_enum! {
    /// Kind of media attached to a gallery or previous-work item
    MediaType {
        Image => "image",
        Video => "video",
    }
}

impl Default for MediaType {
    fn default() -> Self {
        MediaType::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_codes() {
        assert_eq!(ServiceCode::ALL.len(), 9);
        assert_eq!("uv_body_paint".parse::<ServiceCode>(), Ok(ServiceCode::UvBodyPaint));
        assert!("tattoo_removal".parse::<ServiceCode>().is_err());
    }

    #[test]
    fn test_booking_status_parsing_is_exact() {
        assert_eq!("confirmed".parse::<BookingStatus>(), Ok(BookingStatus::Confirmed));
        assert!("Confirmed".parse::<BookingStatus>().is_err());
        assert!("archived".parse::<BookingStatus>().is_err());
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ServiceCode::FestivalFaceGems).unwrap();
        assert_eq!(json, "\"festival_face_gems\"");
        let media: MediaType = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(media, MediaType::Video);
    }
}
