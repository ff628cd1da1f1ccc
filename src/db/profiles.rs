use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewProfile, Profile};

pub async fn list(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY name ASC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, profile: &NewProfile) -> Result<Profile, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        "INSERT INTO profiles (name, email, title, bio, skills, hourly_rate, location, availability, avatar_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(&profile.name)
    .bind(&profile.email)
    .bind(&profile.title)
    .bind(&profile.bio)
    .bind(&profile.skills)
    .bind(profile.hourly_rate)
    .bind(&profile.location)
    .bind(profile.availability)
    .bind(&profile.avatar_url)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    profile: &NewProfile,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        "UPDATE profiles SET name = $2, email = $3, title = $4, bio = $5, skills = $6,
                hourly_rate = $7, location = $8, availability = $9, avatar_url = $10,
                updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&profile.name)
    .bind(&profile.email)
    .bind(&profile.title)
    .bind(&profile.bio)
    .bind(&profile.skills)
    .bind(profile.hourly_rate)
    .bind(&profile.location)
    .bind(profile.availability)
    .bind(&profile.avatar_url)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
