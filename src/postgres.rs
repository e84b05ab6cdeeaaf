//! PostgreSQL integration
//!
//! `sqlx` [`Type`], [`Encode`] and [`Decode`] for every wrapper, so a
//! `Nullable` can be bound as a query parameter or read from a row. An
//! invalid wrapper binds as NULL; a NULL column decodes to an invalid
//! wrapper.
//!
//! PostgreSQL has no unsigned 64-bit type, so [`NullUint`] travels as
//! `BIGINT` and rejects values outside its range in both directions.

use crate::kinds::NullUint;
use crate::nullable::Nullable;
use chrono::{DateTime, FixedOffset, NaiveDate};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type, ValueRef};

macro_rules! impl_pg_nullable {
    ($($payload:ty),* $(,)?) => {
        $(
            impl Type<Postgres> for Nullable<$payload> {
                fn type_info() -> PgTypeInfo {
                    <$payload as Type<Postgres>>::type_info()
                }

                fn compatible(ty: &PgTypeInfo) -> bool {
                    <$payload as Type<Postgres>>::compatible(ty)
                }
            }

            impl<'q> Encode<'q, Postgres> for Nullable<$payload> {
                fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
                    if !self.valid {
                        return Ok(IsNull::Yes);
                    }
                    <$payload as Encode<'q, Postgres>>::encode_by_ref(&self.value, buf)
                }
            }

            impl<'r> Decode<'r, Postgres> for Nullable<$payload> {
                fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                    if value.is_null() {
                        return Ok(Self::null());
                    }
                    let decoded = <$payload as Decode<'r, Postgres>>::decode(value)?;
                    Ok(Self::new(decoded, true))
                }
            }
        )*
    };
}

impl_pg_nullable!(bool, i64, f64, String, NaiveDate, DateTime<FixedOffset>);

impl Type<Postgres> for NullUint {
    fn type_info() -> PgTypeInfo {
        <i64 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i64 as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for NullUint {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if !self.valid {
            return Ok(IsNull::Yes);
        }
        let signed = i64::try_from(self.value)?;
        <i64 as Encode<'q, Postgres>>::encode_by_ref(&signed, buf)
    }
}

impl<'r> Decode<'r, Postgres> for NullUint {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Self::null());
        }
        let signed = <i64 as Decode<'r, Postgres>>::decode(value)?;
        Ok(Self::new(u64::try_from(signed)?, true))
    }
}
