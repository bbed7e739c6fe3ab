/// Recovers the result type of a typed document, i.e. "what does executing
/// this document return" from "what type of document is this". Emitted
/// unchanged in every mode.
pub(super) const DOCUMENT_TYPE_UTILITY: &[&str] = &[
    "export type DocumentType<TDocumentNode extends DocumentNode<any, any>> = TDocumentNode extends DocumentNode<",
    "  infer TType,",
    "  any",
    ">",
    "  ? TType",
    "  : never;",
];
