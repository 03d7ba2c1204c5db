use std::fs;
use std::path::{Path, PathBuf};

use crate::docs::beer::{
    beer_create_request_fields, beer_path_parameters, beer_request_parameters,
    beer_response_fields, beer_update_request_fields,
};
use crate::docs::descriptor::{FieldDescriptor, ParameterDescriptor};
use crate::docs::DocsError;

/// 一个接口对应的文档片段目录，例如 `v1/beer-get`
#[derive(Debug, Clone)]
pub struct Snippet {
    pub identifier: &'static str,
    pub files: Vec<(&'static str, String)>,
}

pub fn fields_table(fields: &[FieldDescriptor]) -> String {
    let mut table = String::from("|===\n|Path|Type|Description|Constraints\n");

    for field in fields.iter().filter(|field| !field.ignored) {
        let description = if field.optional {
            format!("{} (optional)", field.description)
        } else {
            field.description.to_string()
        };

        table.push_str(&format!(
            "\n|`{}`\n|`{}`\n|{}\n|{}\n",
            field.path,
            field.field_type,
            description,
            field.constraint_text()
        ));
    }

    table.push_str("\n|===\n");
    table
}

pub fn parameters_table(parameters: &[ParameterDescriptor]) -> String {
    let mut table = String::from("|===\n|Parameter|Description\n");

    for parameter in parameters {
        table.push_str(&format!("\n|`{}`\n|{}\n", parameter.name, parameter.description));
    }

    table.push_str("\n|===\n");
    table
}

pub fn beer_snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            identifier: "v1/beer-get",
            files: vec![
                ("path-parameters.adoc", parameters_table(&beer_path_parameters())),
                ("request-parameters.adoc", parameters_table(&beer_request_parameters())),
                ("response-fields.adoc", fields_table(&beer_response_fields())),
            ],
        },
        Snippet {
            identifier: "v1/beer-post",
            files: vec![("request-fields.adoc", fields_table(&beer_create_request_fields()))],
        },
        Snippet {
            identifier: "v1/beer-put",
            files: vec![
                ("path-parameters.adoc", parameters_table(&beer_path_parameters())),
                ("request-fields.adoc", fields_table(&beer_update_request_fields())),
            ],
        },
    ]
}

/// 把所有片段写到 `out_dir` 下，返回写入的文件列表
pub fn write_snippets(out_dir: &Path) -> Result<Vec<PathBuf>, DocsError> {
    let mut written = Vec::new();

    for snippet in beer_snippets() {
        let dir = out_dir.join(snippet.identifier);
        fs::create_dir_all(&dir)?;

        for (name, content) in snippet.files {
            let path = dir.join(name);
            fs::write(&path, content)?;
            tracing::debug!(path = %path.display(), "Snippet written");
            written.push(path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::descriptor::{parameter_with_name, FieldType};

    #[test]
    fn test_fields_table_skips_ignored() {
        let table = fields_table(&[
            FieldDescriptor::field_with_path("id").ignored(),
            FieldDescriptor::field_with_path("upc")
                .of_type(FieldType::Long)
                .description("UPC of Beer")
                .constraints(["Must not be null", "Must be positive"]),
        ]);

        assert_eq!(
            table,
            "|===\n|Path|Type|Description|Constraints\n\n|`upc`\n|`Long`\n|UPC of Beer\n|Must not be null. Must be positive\n\n|===\n"
        );
    }

    #[test]
    fn test_parameters_table() {
        let table = parameters_table(&[parameter_with_name("beerId", "UUID of desired beer to get.")]);

        assert!(table.contains("|`beerId`\n|UUID of desired beer to get.\n"));
        assert!(table.starts_with("|===\n|Parameter|Description\n"));
    }

    #[test]
    fn test_write_snippets() {
        let dir = tempfile::tempdir().unwrap();

        let written = write_snippets(dir.path()).unwrap();

        assert_eq!(written.len(), 6);
        let post = std::fs::read_to_string(dir.path().join("v1/beer-post/request-fields.adoc")).unwrap();
        assert!(post.contains("|`beerStyle`"));
        assert!(post.contains("Must be one of LAGER"));
        assert!(!post.contains("|`quantityOnHand`"));

        let get = std::fs::read_to_string(dir.path().join("v1/beer-get/response-fields.adoc")).unwrap();
        assert!(get.contains("|`quantityOnHand`"));
        assert!(get.contains("|`UUID`"));
    }
}
