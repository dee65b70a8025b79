use crate::postgres::archive::PgRecord;

/// The four statements an archive issues, assembled from a record's table and
/// column metadata. Nothing in the system queries beyond a full scan, so there
/// is no select-by-id or filtered variant.
#[derive(Debug, Clone)]
pub(crate) struct ArchiveSql {
    pub list: String,
    pub insert: String,
    pub update: String,
    pub delete: String,
}

impl ArchiveSql {
    pub fn for_record<R: PgRecord>() -> Self {
        let columns = R::COLUMNS.join(", ");

        let placeholders = (1..=R::COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");

        // $1 is reserved for the id in the update statement
        let assignments = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            list: format!("select id, {columns} from {}", R::TABLE),
            insert: format!(
                "insert into {} ({columns}) values ({placeholders})",
                R::TABLE
            ),
            update: format!("update {} set {assignments} where id = $1", R::TABLE),
            delete: format!("delete from {} where id = $1", R::TABLE),
        }
    }
}
