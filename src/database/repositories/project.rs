//! Project, team and resource repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::project::{CreateProjectRequest, CreateTeamRequest, Project, Team};
use crate::models::resource::{CreateResourceRequest, Resource};
use crate::utils::errors::LotteError;

#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new project
    pub async fn create(&self, request: CreateProjectRequest) -> Result<Project, LotteError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (slug, name, source_language_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, slug, name, source_language_code, created_at, updated_at
            "#,
        )
        .bind(request.slug)
        .bind(request.name)
        .bind(request.source_language_code.unwrap_or_else(|| "en".to_string()))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    /// Find project by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, LotteError> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, slug, name, source_language_code, created_at, updated_at FROM projects WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    /// Find a resource within a project by slug
    pub async fn find_resource(
        &self,
        project_id: i64,
        slug: &str,
    ) -> Result<Option<Resource>, LotteError> {
        let resource = sqlx::query_as::<_, Resource>(
            "SELECT id, project_id, slug, name, created_at FROM resources WHERE project_id = $1 AND slug = $2",
        )
        .bind(project_id)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resource)
    }

    /// Create a resource in a project
    pub async fn create_resource(
        &self,
        request: CreateResourceRequest,
    ) -> Result<Resource, LotteError> {
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources (project_id, slug, name, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, project_id, slug, name, created_at
            "#,
        )
        .bind(request.project_id)
        .bind(request.slug)
        .bind(request.name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(resource)
    }

    /// Grant maintainer rights on a project
    pub async fn add_maintainer(&self, project_id: i64, user_id: i64) -> Result<(), LotteError> {
        sqlx::query(
            "INSERT INTO project_maintainers (project_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check maintainer rights on a project
    pub async fn is_maintainer(&self, project_id: i64, user_id: i64) -> Result<bool, LotteError> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM project_maintainers WHERE project_id = $1 AND user_id = $2)",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }

    /// Create a translation team for a language
    pub async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, LotteError> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (project_id, language_code)
            VALUES ($1, $2)
            RETURNING id, project_id, language_code
            "#,
        )
        .bind(request.project_id)
        .bind(request.language_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(team)
    }

    /// Add a user to a team
    pub async fn add_team_member(&self, team_id: i64, user_id: i64) -> Result<(), LotteError> {
        sqlx::query(
            "INSERT INTO team_members (team_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(team_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check membership of the team for (project, language)
    pub async fn is_team_member(
        &self,
        project_id: i64,
        language: &str,
        user_id: i64,
    ) -> Result<bool, LotteError> {
        let row: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM team_members m
                JOIN teams t ON t.id = m.team_id
                WHERE t.project_id = $1 AND t.language_code = $2 AND m.user_id = $3
            )
            "#,
        )
        .bind(project_id)
        .bind(language)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }
}
