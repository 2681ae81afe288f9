use indexmap::IndexMap;
use oas_model::{
    AdditionalProperties, Components, Contact, Discriminator, Document, Extensible, HttpScheme,
    Info, MediaType, OAuth2Scheme, OAuthFlow, OAuthFlows, Operation, Parameter, PathItem, Paths,
    RefOr, RequestBody, Response, Responses, Schema, SecurityScheme, Server, ServerVariable,
    Tag,
};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Builds a petstore-flavored document touching every object family.
fn petstore() -> Document {
    let pet_schema = Schema::new("object")
        .with_property("id", Schema::new("integer").with_format("int64"))
        .with_property("name", Schema::new("string"))
        .with_property(
            "tags",
            Schema::new("array").with_items(Schema::new("string")),
        )
        .with_required(vec!["id".into(), "name".into()]);

    let strict_pet = Schema {
        additional_properties: Some(AdditionalProperties::Flag(false)),
        ..pet_schema.clone()
    };

    let pet_choice = Schema {
        one_of: Some(vec![
            RefOr::reference("#/components/schemas/Cat"),
            RefOr::reference("#/components/schemas/Dog"),
        ]),
        discriminator: Some(Discriminator::new("petType")),
        ..Default::default()
    };

    let list_pets = Operation::new(
        Responses::new(
            "200",
            Response::new("a paged list of pets").with_content(
                "application/json",
                MediaType::new(
                    Schema::new("array")
                        .with_items(RefOr::<Schema>::reference("#/components/schemas/Pet")),
                ),
            ),
        )
        .with_default(Response::new("unexpected error")),
    )
    .with_operation_id("listPets")
    .with_parameter(
        Parameter::new("limit", "query")
            .with_schema(Schema::new("integer").with_format("int32")),
    );

    let create_pet = Operation {
        request_body: Some(RefOr::Item(RequestBody {
            required: Some(true),
            ..RequestBody::new(
                "application/json",
                MediaType::new(RefOr::<Schema>::reference("#/components/schemas/Pet")),
            )
        })),
        ..Operation::new(Responses::new("201", Response::new("pet created")))
            .with_operation_id("createPet")
    };

    let mut security_schemes = IndexMap::new();
    security_schemes.insert(
        "bearerAuth".to_string(),
        RefOr::Item(SecurityScheme::Http(HttpScheme {
            scheme: "bearer".into(),
            bearer_format: Some("JWT".into()),
            ..Default::default()
        })),
    );
    security_schemes.insert(
        "petstoreAuth".to_string(),
        RefOr::Item(SecurityScheme::OAuth2(OAuth2Scheme {
            flows: OAuthFlows {
                implicit: Some(OAuthFlow {
                    authorization_url: Some("https://example.com/oauth/authorize".into()),
                    scopes: IndexMap::from([
                        ("read:pets".to_string(), "read your pets".to_string()),
                        ("write:pets".to_string(), "modify your pets".to_string()),
                    ]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        })),
    );

    let mut doc = Document::new(
        "3.0.2",
        Info {
            description: Some("A sample API that uses a petstore as an example".into()),
            contact: Some(Contact {
                email: Some("apiteam@example.com".into()),
                ..Default::default()
            }),
            ..Info::new("Swagger Petstore", "1.0.0")
        },
        Paths::new().with_path(
            "/pets",
            PathItem {
                get: Some(list_pets),
                post: Some(create_pet),
                ..Default::default()
            },
        ),
    )
    .with_server(
        Server::new("https://{env}.example.com/v1")
            .with_description("Per-environment endpoint")
            .with_variable("env", {
                ServerVariable {
                    enum_values: Some(vec!["staging".into(), "api".into()]),
                    ..ServerVariable::new("api")
                }
            }),
    )
    .with_components(
        Components::new()
            .with_schema("Pet", pet_schema)
            .with_schema("StrictPet", strict_pet)
            .with_schema("PetChoice", pet_choice)
            .with_schema("Cat", Schema::new("object"))
            .with_schema("Dog", Schema::new("object")),
    )
    .with_tag(Tag::new("pets"));

    if let Some(components) = doc.components.as_mut() {
        components.security_schemes = Some(security_schemes);
    }
    doc.security = Some(vec![IndexMap::from([(
        "bearerAuth".to_string(),
        Vec::new(),
    )])]);
    doc.extensions.insert("x-api-id", json!("petstore-001"));
    doc.paths.extensions.insert("x-router", json!("v2"));
    doc
}

#[test]
fn test_json_round_trip_preserves_graph() {
    let doc = petstore();
    let serialized = doc.to_json_string().unwrap();
    let back = Document::from_json_str(&serialized).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_yaml_round_trip_preserves_graph() {
    let doc = petstore();
    let serialized = doc.to_yaml_string().unwrap();
    let back = Document::from_yaml_str(&serialized).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_cross_format_round_trip() {
    let doc = petstore();
    let yaml = doc.to_yaml_string().unwrap();
    let via_yaml = Document::from_yaml_str(&yaml).unwrap();
    let json = via_yaml.to_json_string_pretty().unwrap();
    let via_json = Document::from_json_str(&json).unwrap();
    assert_eq!(via_json, doc);
}

#[test]
fn test_serialized_shape_uses_spec_keys() {
    let value = serde_json::to_value(petstore()).unwrap();

    // Spec-exact key names at each level.
    assert_eq!(value["openapi"], json!("3.0.2"));
    assert_eq!(
        value["paths"]["/pets"]["get"]["operationId"],
        json!("listPets")
    );
    assert_eq!(
        value["paths"]["/pets"]["post"]["requestBody"]["required"],
        json!(true)
    );
    assert_eq!(
        value["components"]["securitySchemes"]["bearerAuth"]["bearerFormat"],
        json!("JWT")
    );
    assert_eq!(
        value["components"]["schemas"]["PetChoice"]["discriminator"]["propertyName"],
        json!("petType")
    );

    // additionalProperties false survives as a literal boolean.
    assert_eq!(
        value["components"]["schemas"]["StrictPet"]["additionalProperties"],
        json!(false)
    );

    // Unset fields are omitted, not serialized as null.
    assert!(value.get("externalDocs").is_none());
    assert!(value["info"].get("license").is_none());
    assert!(value["components"]["schemas"]["Pet"]
        .get("additionalProperties")
        .is_none());

    // Extensions sit alongside declared fields.
    assert_eq!(value["x-api-id"], json!("petstore-001"));
    assert_eq!(value["paths"]["x-router"], json!("v2"));
}

#[test]
fn test_server_variables_serialize_verbatim() {
    let value = serde_json::to_value(petstore()).unwrap();
    assert_eq!(
        value["servers"][0],
        json!({
            "url": "https://{env}.example.com/v1",
            "description": "Per-environment endpoint",
            "variables": {
                "env": {"enum": ["staging", "api"], "default": "api"},
            },
        })
    );

    // A server with no variables omits the key entirely.
    let bare = serde_json::to_value(Server::new("https://example.com")).unwrap();
    assert_eq!(bare, json!({"url": "https://example.com"}));
}

#[test]
fn test_extensible_capability_is_uniform() {
    fn stamp<T: Extensible>(object: &mut T) {
        object.extensions_mut().insert("x-stamped", json!(true));
    }

    let mut schema = Schema::new("object");
    let mut info = Info::new("Stamped", "0.1.0");
    let mut operation = Operation::new(Responses::new("204", Response::new("no content")));

    stamp(&mut schema);
    stamp(&mut info);
    stamp(&mut operation);

    for serialized in [
        serde_json::to_value(&schema).unwrap(),
        serde_json::to_value(&info).unwrap(),
        serde_json::to_value(&operation).unwrap(),
    ] {
        assert_eq!(serialized["x-stamped"], json!(true));
    }
}

#[test]
fn test_extensions_survive_deserialization_from_yaml() {
    let yaml = "
openapi: 3.0.2
info:
  title: Minimal
  version: 0.1.0
  x-audience: internal
paths:
  x-router: legacy
  /ping:
    get:
      responses:
        '204':
          description: no content
x-origin: handwritten
";
    let doc = Document::from_yaml_str(yaml).unwrap();
    assert_eq!(doc.extensions.get("x-origin"), Some(&json!("handwritten")));
    assert_eq!(
        doc.info.extensions.get("x-audience"),
        Some(&json!("internal"))
    );
    assert_eq!(doc.paths.extensions.get("x-router"), Some(&json!("legacy")));
    assert_eq!(doc.paths.items.len(), 1);

    let round = doc.to_yaml_string().unwrap();
    let back = Document::from_yaml_str(&round).unwrap();
    assert_eq!(back, doc);
}
