use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Dishes,
    CheckIns,
    Menu,
    WasteLogs,
    Suggestions,
}
