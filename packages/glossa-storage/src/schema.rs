pub fn render_schema(vector_dim: u32) -> String {
	let init = include_str!("../../../sql/init.sql");
	let expanded = expand_includes(init);

	expanded.replace("<VECTOR_DIM>", &vector_dim.to_string())
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"00_extensions.sql" => out.push_str(include_str!("../../../sql/00_extensions.sql")),
				"tables/001_concept.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_concept.sql")),
				"tables/002_vocabulary.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_vocabulary.sql")),
				"tables/003_domain.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_domain.sql")),
				"tables/004_concept_class.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_concept_class.sql")),
				"tables/005_concept_relationship.sql" =>
					out.push_str(include_str!("../../../sql/tables/005_concept_relationship.sql")),
				"tables/006_concept_ancestor.sql" =>
					out.push_str(include_str!("../../../sql/tables/006_concept_ancestor.sql")),
				"tables/007_concept_embedding.sql" =>
					out.push_str(include_str!("../../../sql/tables/007_concept_embedding.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}
