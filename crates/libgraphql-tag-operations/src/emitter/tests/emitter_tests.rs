use crate::DocumentSource;
use crate::DuplicatePolicy;
use crate::EmissionMode;
use crate::Emitter;
use crate::EmitterConfig;

fn single_source() -> Vec<DocumentSource> {
    vec![DocumentSource::new("query A { id }", "ADoc")]
}

mod local {
    use super::*;

    #[test]
    fn single_source_module() {
        let module = Emitter::new(EmitterConfig::default()).emit(&single_source());

        assert_eq!(module.mode(), &EmissionMode::Local);
        assert_eq!(module.content(), concat!(
            "import * as graphql from './graphql';\n",
            "import { TypedDocumentNode as DocumentNode } from '@graphql-typed-document-node/core';\n",
            "\n",
            "export const documents = {\n",
            "    \"query A { id }\": graphql.ADoc,\n",
            "};\n",
            "\n",
            "export function gql(source: \"query A { id }\"): (typeof documents)[\"query A { id }\"];\n",
            "export function gql(source: string): unknown;\n",
            "export function gql(source: string) {\n",
            "  return (documents as any)[source] ?? {};\n",
            "}\n",
            "\n",
            "export type DocumentType<TDocumentNode extends DocumentNode<any, any>> = TDocumentNode extends DocumentNode<\n",
            "  infer TType,\n",
            "  any\n",
            ">\n",
            "  ? TType\n",
            "  : never;\n",
        ));
    }

    #[test]
    fn empty_input_emits_empty_registry_and_catch_all() {
        let module = Emitter::default().emit(&Vec::<DocumentSource>::new());

        assert!(module.registry().is_empty());
        assert_eq!(module.overloads().len(), 1);
        assert!(module.content().contains("export const documents = {};\n"));
        assert!(module.content().contains(concat!(
            "export function gql(source: string): unknown;\n",
            "export function gql(source: string) {\n",
            "  return (documents as any)[source] ?? {};\n",
            "}\n",
        )));
        assert!(!module.content().contains("source: \""));
    }

    #[test]
    fn multiline_sources_are_escaped_consistently() {
        let source = "query A {\n  user(id: \"1\") {\n    id\n  }\n}";
        let module = Emitter::default().emit(&[DocumentSource::new(source, "ADocument")]);

        let key = r#""query A {\n  user(id: \"1\") {\n    id\n  }\n}""#;
        assert!(module.content().contains(&format!("    {key}: graphql.ADocument,\n")));
        assert!(module.content().contains(&format!(
            "export function gql(source: {key}): (typeof documents)[{key}];\n",
        )));
    }

    #[test]
    fn duplicate_sources_emit_one_entry_and_one_overload() {
        let sources = vec![
            DocumentSource::new("query A { id }", "FirstDoc"),
            DocumentSource::new("query A { id }", "SecondDoc"),
        ];

        let first_wins = Emitter::default().emit(&sources);
        assert_eq!(first_wins.content().matches("source: \"query A { id }\"").count(), 1);
        assert!(first_wins.content().contains("graphql.FirstDoc,"));
        assert!(!first_wins.content().contains("SecondDoc"));
        assert_eq!(first_wins.registry().duplicates().len(), 1);

        let last_wins = Emitter::new(
            EmitterConfig::default().with_duplicate_policy(DuplicatePolicy::LastWins)
        ).emit(&sources);
        assert!(last_wins.content().contains("graphql.SecondDoc,"));
        assert!(!last_wins.content().contains("FirstDoc"));
    }

    #[test]
    fn header_and_custom_names() {
        let config = EmitterConfig {
            definitions_module: "./generated/graphql".to_string(),
            registry_name: "registry".to_string(),
            tag_function_name: "graphqlTag".to_string(),
            typed_document_module: "@my/typed-document".to_string(),
            ..EmitterConfig::default()
        }.with_header("/* eslint-disable */");

        let content = Emitter::new(config).emit(&single_source()).into_content();
        assert!(content.starts_with(concat!(
            "/* eslint-disable */\n",
            "import * as graphql from './generated/graphql';\n",
            "import { TypedDocumentNode as DocumentNode } from '@my/typed-document';\n",
        )));
        assert!(content.contains("export const registry = {\n"));
        assert!(content.contains(
            "export function graphqlTag(source: \"query A { id }\"): (typeof registry)[\"query A { id }\"];\n"
        ));
        assert!(content.contains("  return (registry as any)[source] ?? {};\n"));
    }

    #[test]
    fn tag_function_named_like_namespace_renames_namespace() {
        let config = EmitterConfig {
            tag_function_name: "graphql".to_string(),
            ..EmitterConfig::default()
        };

        let content = Emitter::new(config).emit(&single_source()).into_content();
        assert!(content.starts_with("import * as graphql_ from './graphql';\n"));
        assert!(content.contains("    \"query A { id }\": graphql_.ADoc,\n"));
        assert!(content.contains(
            "export function graphql(source: \"query A { id }\"): (typeof documents)[\"query A { id }\"];\n"
        ));
        assert!(!content.contains("import * as graphql from"));
    }

    #[test]
    fn registry_named_like_namespace_renames_namespace() {
        let config = EmitterConfig {
            registry_name: "graphql".to_string(),
            ..EmitterConfig::default()
        };

        let content = Emitter::new(config).emit(&single_source()).into_content();
        assert!(content.starts_with("import * as graphql_ from './graphql';\n"));
        assert!(content.contains(concat!(
            "export const graphql = {\n",
            "    \"query A { id }\": graphql_.ADoc,\n",
        )));
        assert!(content.contains("  return (graphql as any)[source] ?? {};\n"));
    }

    #[test]
    fn registry_named_like_tag_function_is_renamed() {
        let config = EmitterConfig {
            registry_name: "gql".to_string(),
            ..EmitterConfig::default()
        };

        let module = Emitter::new(config).emit(&single_source());
        let content = module.content();
        assert!(content.contains("export const gql_ = {\n"));
        assert!(content.contains(
            "export function gql(source: \"query A { id }\"): (typeof gql_)[\"query A { id }\"];\n"
        ));
        assert!(content.contains("  return (gql_ as any)[source] ?? {};\n"));
        assert!(!content.contains("export const gql ="));
    }

    #[test]
    fn every_colliding_name_stays_unique() {
        let config = EmitterConfig {
            registry_name: "graphql".to_string(),
            tag_function_name: "graphql".to_string(),
            ..EmitterConfig::default()
        };

        let content = Emitter::new(config).emit(&single_source()).into_content();
        assert!(content.starts_with("import * as graphql__ from './graphql';\n"));
        assert!(content.contains("export const graphql_ = {\n"));
        assert!(content.contains("    \"query A { id }\": graphql__.ADoc,\n"));
        assert!(content.contains("export function graphql(source: string): unknown;\n"));
    }
}

mod augmented {
    use super::*;

    fn config() -> EmitterConfig {
        EmitterConfig::default().with_augmented_module_name("my-gql-lib")
    }

    #[test]
    fn single_source_module() {
        let module = Emitter::new(config()).emit(&single_source());

        assert_eq!(module.mode(), &EmissionMode::Augmented {
            module_name: "my-gql-lib".to_string(),
        });
        assert_eq!(module.content(), concat!(
            "import { TypedDocumentNode as DocumentNode } from '@graphql-typed-document-node/core';\n",
            "\n",
            "declare module \"my-gql-lib\" {\n",
            "  export function gql(source: \"query A { id }\"): typeof import('./graphql').ADoc;\n",
            "  export function gql(source: string): unknown;\n",
            "\n",
            "  export type DocumentType<TDocumentNode extends DocumentNode<any, any>> = TDocumentNode extends DocumentNode<\n",
            "    infer TType,\n",
            "    any\n",
            "  >\n",
            "    ? TType\n",
            "    : never;\n",
            "}\n",
        ));
    }

    #[test]
    fn emits_no_registry_value_or_function_body() {
        let content = Emitter::new(config()).emit(&single_source()).into_content();
        assert!(!content.contains("export const"));
        assert!(!content.contains("import * as graphql"));
        assert!(!content.contains("?? {}"));
        assert!(!content.contains(") {\n"));
    }

    #[test]
    fn empty_input_emits_only_catch_all() {
        let content = Emitter::new(config())
            .emit(&Vec::<DocumentSource>::new())
            .into_content();

        assert!(content.contains(concat!(
            "declare module \"my-gql-lib\" {\n",
            "  export function gql(source: string): unknown;\n",
            "\n",
        )));
        assert_eq!(content.matches("export function").count(), 1);
    }
}

#[test]
fn output_is_deterministic() {
    let sources = vec![
        DocumentSource::new("query B { id }", "BDocument"),
        DocumentSource::new("query A { id }", "ADocument"),
        DocumentSource::new("fragment F on User { id }", "FFragmentDoc"),
    ];

    for config in [
        EmitterConfig::default(),
        EmitterConfig::default().with_augmented_module_name("@urql/core"),
    ] {
        let emitter = Emitter::new(config);
        assert_eq!(emitter.emit(&sources), emitter.emit(&sources));
    }
}
