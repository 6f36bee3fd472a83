use crate::domain::errors::DomainError;

const CNT_BRAND_SLUG: &str = "brands_slug_key";
const CNT_STORE_SLUG: &str = "stores_slug_key";
const CNT_STORE_IMAGE_OWNER: &str = "store_images_store_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_BRAND_SLUG | CNT_STORE_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_STORE_IMAGE_OWNER => DomainError::NotFound("store not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
