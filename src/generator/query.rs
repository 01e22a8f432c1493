//! Operation rendering per query dialect.
//!
//! The direct-client dialect builds SQL text from column names and static
//! keywords only. Every value expression travels through the ordered
//! argument array and is referenced by a `$n` placeholder minted in the same
//! loop iteration that pushes the argument, so placeholder count and
//! argument count cannot drift apart and no value is ever interpolated into
//! the query string.

use super::metadata::ResourceMeta;

/// How a bound pattern renders database operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryDialect {
    /// Declarative ORM call with `where`/`include`/`data` sub-structures
    OrmCall,
    /// SQL template string with `$1..$n` placeholders and a parallel
    /// argument array
    ParameterizedSql,
}

/// Abstract database action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Enumerate,
    SingleRead,
    Create,
    Update,
    Delete,
}

/// An abstract database action against one entity
///
/// `filters` and `data` are ordered column → JS-value-expression pairs; the
/// expressions are emitted as JavaScript, never as SQL text.
#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OpKind,
    /// ORM model name (`prisma.<model>`)
    pub model: String,
    /// SQL table name
    pub table: String,
    /// Lookup columns and their value expressions
    pub filters: Vec<(String, String)>,
    /// Relations to include (ORM dialect only; the SQL dialect ignores them)
    pub includes: Vec<String>,
    /// Columns written by create/update and their value expressions
    pub data: Vec<(String, String)>,
    /// JS variable the normalized result binds to, when the caller needs it
    pub binding: Option<String>,
}

impl Operation {
    pub fn enumerate(meta: &ResourceMeta, binding: &str) -> Self {
        Self {
            kind: OpKind::Enumerate,
            model: meta.model.clone(),
            table: meta.table.clone(),
            filters: Vec::new(),
            includes: Vec::new(),
            data: Vec::new(),
            binding: Some(binding.to_string()),
        }
    }

    pub fn single_read(meta: &ResourceMeta, binding: &str, filters: Vec<(String, String)>) -> Self {
        Self {
            kind: OpKind::SingleRead,
            model: meta.model.clone(),
            table: meta.table.clone(),
            filters,
            includes: Vec::new(),
            data: Vec::new(),
            binding: Some(binding.to_string()),
        }
    }

    pub fn create(meta: &ResourceMeta, binding: Option<&str>, data: Vec<(String, String)>) -> Self {
        Self {
            kind: OpKind::Create,
            model: meta.model.clone(),
            table: meta.table.clone(),
            filters: Vec::new(),
            includes: Vec::new(),
            data,
            binding: binding.map(str::to_string),
        }
    }

    pub fn update(
        meta: &ResourceMeta,
        binding: Option<&str>,
        filters: Vec<(String, String)>,
        data: Vec<(String, String)>,
    ) -> Self {
        Self {
            kind: OpKind::Update,
            model: meta.model.clone(),
            table: meta.table.clone(),
            filters,
            includes: Vec::new(),
            data,
            binding: binding.map(str::to_string),
        }
    }

    pub fn delete(meta: &ResourceMeta, filters: Vec<(String, String)>) -> Self {
        Self {
            kind: OpKind::Delete,
            model: meta.model.clone(),
            table: meta.table.clone(),
            filters,
            includes: Vec::new(),
            data: Vec::new(),
            binding: None,
        }
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }
}

/// Render an operation in the given dialect
pub fn render_query(dialect: QueryDialect, op: &Operation) -> String {
    match dialect {
        QueryDialect::OrmCall => render_orm(op),
        QueryDialect::ParameterizedSql => render_sql(op),
    }
}

fn inline_object(pairs: &[(String, String)]) -> String {
    let parts: Vec<String> = pairs
        .iter()
        .map(|(col, value)| format!("{col}: {value}"))
        .collect();
    format!("{{ {} }}", parts.join(", "))
}

fn include_object(includes: &[String]) -> String {
    let parts: Vec<String> = includes.iter().map(|rel| format!("{rel}: true")).collect();
    format!("{{ {} }}", parts.join(", "))
}

fn data_block(pairs: &[(String, String)]) -> String {
    let mut out = String::from("data: {\n");
    for (col, value) in pairs {
        out.push_str(&format!("    {col}: {value},\n"));
    }
    out.push_str("  }");
    out
}

fn render_orm(op: &Operation) -> String {
    let call = match op.kind {
        OpKind::Enumerate => "findMany",
        OpKind::SingleRead => "findUnique",
        OpKind::Create => "create",
        OpKind::Update => "update",
        OpKind::Delete => "delete",
    };

    let mut sections: Vec<String> = Vec::new();
    if !op.filters.is_empty() {
        sections.push(format!("where: {}", inline_object(&op.filters)));
    }
    if matches!(op.kind, OpKind::Create | OpKind::Update) {
        sections.push(data_block(&op.data));
    }
    if !op.includes.is_empty() && matches!(op.kind, OpKind::Enumerate | OpKind::SingleRead) {
        sections.push(format!("include: {}", include_object(&op.includes)));
    }

    let args = if sections.is_empty() {
        String::new()
    } else {
        let mut body = String::from("{\n");
        for section in &sections {
            body.push_str(&format!("  {section},\n"));
        }
        body.push('}');
        body
    };

    let invocation = format!("await prisma.{}.{}({})", op.model, call, args);
    match &op.binding {
        Some(binding) => format!("const {binding} = {invocation};"),
        None => format!("{invocation};"),
    }
}

fn render_sql(op: &Operation) -> String {
    // The only place SQL text and arguments are assembled. Values are pushed
    // to `params` and referenced as `$<len>` in the same step.
    let mut params: Vec<String> = Vec::new();
    let placeholder = |params: &mut Vec<String>, value: &str| {
        params.push(value.to_string());
        format!("${}", params.len())
    };

    let sql = match op.kind {
        OpKind::Enumerate => format!(
            "SELECT * FROM {}{}",
            op.table,
            where_clause(&op.filters, &mut params)
        ),
        OpKind::SingleRead => format!(
            "SELECT * FROM {}{} LIMIT 1",
            op.table,
            where_clause(&op.filters, &mut params)
        ),
        OpKind::Create => {
            // The direct client has no id default, so a generated id column
            // leads the insert unless the caller supplies one.
            let mut columns: Vec<(String, String)> = Vec::new();
            if !op.data.iter().any(|(col, _)| col == "id") {
                columns.push(("id".to_string(), "generateId()".to_string()));
            }
            columns.extend(op.data.iter().cloned());
            let names: Vec<&str> = columns.iter().map(|(col, _)| col.as_str()).collect();
            let slots: Vec<String> = columns
                .iter()
                .map(|(_, value)| placeholder(&mut params, value))
                .collect();
            let returning = if op.binding.is_some() {
                " RETURNING *"
            } else {
                ""
            };
            format!(
                "INSERT INTO {} ({}) VALUES ({}){}",
                op.table,
                names.join(", "),
                slots.join(", "),
                returning
            )
        }
        OpKind::Update => {
            let sets: Vec<String> = op
                .data
                .iter()
                .map(|(col, value)| format!("{} = {}", col, placeholder(&mut params, value)))
                .collect();
            let returning = if op.binding.is_some() {
                " RETURNING *"
            } else {
                ""
            };
            format!(
                "UPDATE {} SET {}{}{}",
                op.table,
                sets.join(", "),
                where_clause(&op.filters, &mut params),
                returning
            )
        }
        OpKind::Delete => format!(
            "DELETE FROM {}{}",
            op.table,
            where_clause(&op.filters, &mut params)
        ),
    };

    let args = format!("[{}]", params.join(", "));
    match &op.binding {
        Some(binding) => {
            let accessor = match op.kind {
                OpKind::Enumerate => ".rows",
                _ => ".rows[0]",
            };
            format!(
                "const {binding}Result = await client.query(\n  '{sql}',\n  {args}\n);\nconst {binding} = {binding}Result{accessor};"
            )
        }
        None => format!("await client.query(\n  '{sql}',\n  {args}\n);"),
    }
}

fn where_clause(filters: &[(String, String)], params: &mut Vec<String>) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let clauses: Vec<String> = filters
        .iter()
        .map(|(col, value)| {
            params.push(value.clone());
            format!("{} = ${}", col, params.len())
        })
        .collect();
    format!(" WHERE {}", clauses.join(" AND "))
}
