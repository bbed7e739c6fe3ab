use crate::DefinitionKind;
use crate::DefinitionNamer;
use crate::NamingConvention;

fn pascal(name: &str) -> String {
    NamingConvention::PascalCase.apply(name, false)
}

#[test]
fn pascal_case_word_boundaries() {
    assert_eq!(pascal("getUser"), "GetUser");
    assert_eq!(pascal("GetUser"), "GetUser");
    assert_eq!(pascal("tweets"), "Tweets");
    assert_eq!(pascal("HTMLPage"), "HtmlPage");
    assert_eq!(pascal("getUSER"), "GetUser");
    assert_eq!(pascal("query2Tweets"), "Query2Tweets");
}

#[test]
fn underscores_preserved_by_default() {
    assert_eq!(pascal("get_user"), "Get_User");
    assert_eq!(pascal("_private"), "_Private");
}

#[test]
fn underscores_dropped_when_transformed() {
    let namer = DefinitionNamer {
        transform_underscore: true,
        ..DefinitionNamer::default()
    };
    assert_eq!(namer.symbol_name(DefinitionKind::Query, "get_user_by_id"), "GetUserByIdDocument");
}

#[test]
fn keep_convention_leaves_name_verbatim() {
    let namer = DefinitionNamer {
        naming_convention: NamingConvention::Keep,
        ..DefinitionNamer::default()
    };
    assert_eq!(namer.symbol_name(DefinitionKind::Mutation, "createTweet"), "createTweetDocument");
    assert_eq!(namer.symbol_name(DefinitionKind::Fragment, "tweet_fields"), "tweet_fieldsFragmentDoc");
}

#[test]
fn suffix_by_definition_kind() {
    let namer = DefinitionNamer::default();
    assert_eq!(namer.symbol_name(DefinitionKind::Query, "Foo"), "FooDocument");
    assert_eq!(namer.symbol_name(DefinitionKind::Mutation, "Foo"), "FooDocument");
    assert_eq!(namer.symbol_name(DefinitionKind::Subscription, "Foo"), "FooDocument");
    assert_eq!(namer.symbol_name(DefinitionKind::Fragment, "Foo"), "FooFragmentDoc");
}

#[test]
fn digit_leading_words_keep_an_underscore() {
    assert_eq!(NamingConvention::PascalCase.apply("user_2fa", true), "User_2fa");
    assert_eq!(NamingConvention::PascalCase.apply("user_2fa", false), "User_2fa");
    assert_eq!(NamingConvention::PascalCase.apply("get_user_2fa_code", true), "GetUser_2faCode");
    assert_eq!(NamingConvention::PascalCase.apply("2fa", true), "2fa");

    let namer = DefinitionNamer {
        transform_underscore: true,
        ..DefinitionNamer::default()
    };
    assert_eq!(namer.symbol_name(DefinitionKind::Query, "verify_2fa"), "Verify_2faDocument");
}
