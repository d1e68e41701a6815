//! Integration tests rendering model templates through the full filter table

use gen_api_models::{EnvironmentConfig, Error, RenderScope, TemplateEnvironment};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

const OPERATIONS_TEMPLATE: &str = r#"{%- for op in operations %}
{%- set query = op.parameters | paramIn(location="query") %}
export type {{ op.name }}Query = {
{%- for p in query %} {{ p.name | stripQuestionMark }}{{ p.name | setOptionalSymbol }}: string;{% endfor %} };
export const {{ op.name }} = {{ op.parameters | paramNotIn(location="query") | toFnArgs }} => {{ op.responses | first | openapiResponseToTSCommonsResponse }};
{%- for r in op.responses %}{{ r.payloadType | addImport }}{% endfor %}
{%- endfor %}"#;

fn petstore() -> Value {
    json!({
        "operations": [
            {
                "name": "getPet",
                "parameters": [
                    {"name": "petId", "in": "path", "required": true},
                    {"name": "limit?", "in": "query"}
                ],
                "responses": [
                    {"statusCode": "200", "payloadType": "IPet"},
                    {"statusCode": "404", "payloadType": "IError"}
                ]
            },
            {
                "name": "createPet",
                "parameters": [
                    {"name": "body", "in": "body", "required": true},
                    {"name": "dryRun?", "in": "query"}
                ],
                "responses": [
                    {"statusCode": 201, "payloadType": "IPet"}
                ]
            }
        ]
    })
}

fn operations_environment(config: EnvironmentConfig) -> TemplateEnvironment {
    TemplateEnvironment::from_templates([("operations.ts.njk", OPERATIONS_TEMPLATE)], config)
        .unwrap()
}

#[test]
fn test_render_operations_module() {
    let env = operations_environment(EnvironmentConfig::default());

    let output = env.render("operations.ts.njk", &petstore()).unwrap();

    let expected = "\nexport type getPetQuery = { limit?: string; };\
                    \nexport const getPet = ({petId}) => IResponseSuccessJson<IPet>;\
                    \nexport type createPetQuery = { dryRun?: string; };\
                    \nexport const createPet = ({body}) => IResponseSuccessRedirectToResource<IPet, IPet>;";
    assert_eq!(output.content, expected);
    assert_eq!(output.imports, vec!["IError", "IPet"]);
    assert!(output.type_aliases.is_empty());
}

#[test]
fn test_render_from_yaml_context() {
    let env = operations_environment(EnvironmentConfig::default());
    let context: Value = serde_yaml::from_str(
        r#"
operations:
  - name: listPets
    parameters:
      - name: tag?
        in: query
    responses:
      - e1: "202"
        payloadType: IPetList
"#,
    )
    .unwrap();

    let output = env.render("operations.ts.njk", &context).unwrap();

    assert_eq!(
        output.content,
        "\nexport type listPetsQuery = { tag?: string; };\
         \nexport const listPets = ({}) => ResponseSuccessAccepted<IPetList>;"
    );
    assert_eq!(output.imports, vec!["IPetList"]);
}

#[test]
fn test_unmapped_status_code_renders_sentinel() {
    let env = operations_environment(EnvironmentConfig::default());
    let context = json!({
        "operations": [{
            "name": "deletePet",
            "parameters": [],
            "responses": [{"statusCode": "204", "payloadType": "void"}]
        }]
    });

    let output = env.render("operations.ts.njk", &context).unwrap();
    assert!(output.content.ends_with("export const deletePet = ({}) => NotImplemented;"));
}

#[test]
fn test_response_without_status_code_renders_sentinel() {
    let env = operations_environment(EnvironmentConfig::default());
    let context = json!({
        "operations": [{
            "name": "ping",
            "parameters": null,
            "responses": [{"statusCode": null, "payloadType": "void"}]
        }]
    });

    let output = env.render("operations.ts.njk", &context).unwrap();
    assert!(output.content.ends_with("export const ping = ({}) => NotImplemented;"));
}

#[test]
fn test_strict_mode_rejects_unmapped_status_code() {
    let config = EnvironmentConfig {
        strict_status_codes: true,
        ..Default::default()
    };
    let env = operations_environment(config);
    let context = json!({
        "operations": [{
            "name": "deletePet",
            "parameters": [],
            "responses": [{"statusCode": "204", "payloadType": "void"}]
        }]
    });

    let result = env.render("operations.ts.njk", &context);
    assert!(matches!(result, Err(Error::Tera(_))));
}

#[test]
fn test_type_aliases_and_reset_functions() {
    let env = TemplateEnvironment::from_templates(
        [(
            "aliases.ts.njk",
            r#"{{ aliases | addTypeAlias }}{{ resetTypeAliases() }}{{ addTypeAlias(key="PetId") }}{{ addTypeAlias(key="OrderId") }}{{ getTypeAliases() }}"#,
        )],
        EnvironmentConfig::default(),
    )
    .unwrap();

    let output = env
        .render("aliases.ts.njk", &json!({"aliases": ["Stale", "Gone"]}))
        .unwrap();

    assert_eq!(output.content, "OrderId\nPetId");
    assert_eq!(output.type_aliases, vec!["OrderId", "PetId"]);
    assert!(output.imports.is_empty());
}

#[test]
fn test_units_sharing_a_scope() {
    let env = TemplateEnvironment::from_templates(
        [
            ("pet.ts.njk", r#"{{ "IPet" | addImport }}"#),
            (
                "order.ts.njk",
                r#"{% set both = ["IOrder", "IPet"] %}{{ both | addImport }}"#,
            ),
        ],
        EnvironmentConfig::default(),
    )
    .unwrap();
    let scope = RenderScope::new();

    env.render_with_scope("pet.ts.njk", &json!({}), &scope).unwrap();
    let output = env
        .render_with_scope("order.ts.njk", &json!({}), &scope)
        .unwrap();
    assert_eq!(output.imports, vec!["IOrder", "IPet"]);

    let fresh = env.render("order.ts.njk", &json!({})).unwrap();
    assert_eq!(fresh.imports, vec!["IOrder", "IPet"]);
    let alone = env.render("pet.ts.njk", &json!({})).unwrap();
    assert_eq!(alone.imports, vec!["IPet"]);
}

#[tokio::test]
async fn test_environment_from_config_file() {
    let dir = TempDir::new().unwrap();
    let template_dir = dir.path().join("templates");
    fs::create_dir_all(template_dir.join("models")).unwrap();
    fs::write(template_dir.join("models/operations.tpl"), OPERATIONS_TEMPLATE).unwrap();
    fs::write(template_dir.join("models/ignored.njk"), "{{ nope }").unwrap();

    let config_path = dir.path().join("gen-api-models.yaml");
    let config = EnvironmentConfig {
        template_dir: Some(template_dir),
        template_extension: ".tpl".to_string(),
        ..Default::default()
    };
    config.save(&config_path).await.unwrap();

    let loaded = EnvironmentConfig::from_file(&config_path).await.unwrap();
    assert_eq!(loaded, config);

    let env = TemplateEnvironment::from_config(loaded).unwrap();
    assert_eq!(env.template_names(), vec!["models/operations.tpl"]);

    let output = env.render("models/operations.tpl", &petstore()).unwrap();
    assert_eq!(output.imports, vec!["IError", "IPet"]);
}
