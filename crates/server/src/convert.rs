//! Mappings between engine types and wire types.
//!
//! `api_types` carries its own enums so clients never depend on the engine;
//! the translation lives here, at the boundary.

pub(crate) fn kind_to_api(kind: engine::TransactionKind) -> api_types::TransactionKind {
    match kind {
        engine::TransactionKind::Income => api_types::TransactionKind::Income,
        engine::TransactionKind::Expense => api_types::TransactionKind::Expense,
    }
}

pub(crate) fn kind_from_api(kind: api_types::TransactionKind) -> engine::TransactionKind {
    match kind {
        api_types::TransactionKind::Income => engine::TransactionKind::Income,
        api_types::TransactionKind::Expense => engine::TransactionKind::Expense,
    }
}

pub(crate) fn category_to_api(category: engine::Category) -> api_types::Category {
    match category {
        engine::Category::Food => api_types::Category::Food,
        engine::Category::Transportation => api_types::Category::Transportation,
        engine::Category::Housing => api_types::Category::Housing,
        engine::Category::Utilities => api_types::Category::Utilities,
        engine::Category::Entertainment => api_types::Category::Entertainment,
        engine::Category::Healthcare => api_types::Category::Healthcare,
        engine::Category::Shopping => api_types::Category::Shopping,
        engine::Category::Other => api_types::Category::Other,
        engine::Category::Uncategorized => api_types::Category::Uncategorized,
    }
}

pub(crate) fn category_from_api(category: api_types::Category) -> engine::Category {
    match category {
        api_types::Category::Food => engine::Category::Food,
        api_types::Category::Transportation => engine::Category::Transportation,
        api_types::Category::Housing => engine::Category::Housing,
        api_types::Category::Utilities => engine::Category::Utilities,
        api_types::Category::Entertainment => engine::Category::Entertainment,
        api_types::Category::Healthcare => engine::Category::Healthcare,
        api_types::Category::Shopping => engine::Category::Shopping,
        api_types::Category::Other => engine::Category::Other,
        api_types::Category::Uncategorized => engine::Category::Uncategorized,
    }
}

pub(crate) fn month_to_api(month: engine::Month) -> api_types::Month {
    match month {
        engine::Month::January => api_types::Month::January,
        engine::Month::February => api_types::Month::February,
        engine::Month::March => api_types::Month::March,
        engine::Month::April => api_types::Month::April,
        engine::Month::May => api_types::Month::May,
        engine::Month::June => api_types::Month::June,
        engine::Month::July => api_types::Month::July,
        engine::Month::August => api_types::Month::August,
        engine::Month::September => api_types::Month::September,
        engine::Month::October => api_types::Month::October,
        engine::Month::November => api_types::Month::November,
        engine::Month::December => api_types::Month::December,
    }
}

pub(crate) fn month_from_api(month: api_types::Month) -> engine::Month {
    match month {
        api_types::Month::January => engine::Month::January,
        api_types::Month::February => engine::Month::February,
        api_types::Month::March => engine::Month::March,
        api_types::Month::April => engine::Month::April,
        api_types::Month::May => engine::Month::May,
        api_types::Month::June => engine::Month::June,
        api_types::Month::July => engine::Month::July,
        api_types::Month::August => engine::Month::August,
        api_types::Month::September => engine::Month::September,
        api_types::Month::October => engine::Month::October,
        api_types::Month::November => engine::Month::November,
        api_types::Month::December => engine::Month::December,
    }
}
