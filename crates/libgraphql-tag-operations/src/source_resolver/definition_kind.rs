#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Fragment,
    Mutation,
    Query,
    Subscription,
}
