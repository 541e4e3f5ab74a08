mod choice_list;
mod record;

pub use choice_list::{ChoiceList, filter, label_for_source, starts_with_ignore_case};
pub use record::{
    DEFAULT_LOGIN, FIELD_SEPARATOR, FormState, MAX_EXTRA_FIELDS, format_login, join_record,
    parse_id, strip_login_suffix,
};
