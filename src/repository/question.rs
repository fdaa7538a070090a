use diesel::prelude::*;

use crate::db::unicode_lower;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::QuestionId;
use crate::models::question::{NewQuestion as DbNewQuestion, Question as DbQuestion};
use crate::repository::{
    DieselRepository, QuestionListQuery, QuestionReader, QuestionWriter, RepositoryResult,
};

/// Escape `LIKE` wildcards so the term is matched literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl QuestionReader for DieselRepository {
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<(usize, Vec<Question>)> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = questions::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(category_id) = query.category_id {
                items = items.filter(questions::category.eq(category_id.get()));
            }

            if let Some(search) = &query.search {
                items = items.filter(
                    unicode_lower(questions::question)
                        .like(like_pattern(&search.to_lowercase()))
                        .escape('\\'),
                );
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();

        if let Some(pagination) = &query.pagination {
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order(questions::id.asc())
            .load::<DbQuestion>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Question>, _>>()?;

        Ok((total, items))
    }

    fn count_questions(&self) -> RepositoryResult<usize> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let total = questions::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }

    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let question = questions::table
            .filter(questions::id.eq(id.get()))
            .first::<DbQuestion>(&mut conn)
            .optional()?;

        let question = question.map(TryInto::try_into).transpose()?;
        Ok(question)
    }
}

impl QuestionWriter for DieselRepository {
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        use crate::schema::questions;

        let mut conn = self.conn()?;
        let db_question: DbNewQuestion = question.clone().into();

        let created = conn.transaction(|conn| {
            diesel::insert_into(questions::table)
                .values(&db_question)
                .returning(questions::all_columns)
                .get_result::<DbQuestion>(conn)
        })?;

        Ok(created.try_into()?)
    }

    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            diesel::delete(questions::table.filter(questions::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }
}
