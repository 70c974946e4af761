//! Built-in default configuration of the example program.
//!
//! | Section    | Key                    | Default                                            |
//! |------------|------------------------|----------------------------------------------------|
//! | `[bool]`   | `debug`                | `false`                                            |
//! | `[bool]`   | `auto_restart`         | `true`                                             |
//! | `[string]` | `app_name`             | `MyApp`                                            |
//! | `[string]` | `db_connection_string` | `host=localhost;user=user;password=pass;db=mydb`   |
//! | `[int]`    | `max_retries`          | `3`                                                |
//! | `[int]`    | `port`                 | `8080`                                             |
//! | `[float]`  | `version`              | `1.0`                                              |

use std::collections::HashMap;

use cfgparser_core::{Config, Schema};

/// Returns the schema the example program parses and writes against.
pub fn default_schema() -> Schema {
    Schema::new(Config::from_literals(
        HashMap::from([
            ("debug".to_string(), false),
            ("auto_restart".to_string(), true),
        ]),
        HashMap::from([
            ("app_name".to_string(), "MyApp".to_string()),
            (
                "db_connection_string".to_string(),
                "host=localhost;user=user;password=pass;db=mydb".to_string(),
            ),
        ]),
        HashMap::from([
            ("max_retries".to_string(), 3),
            ("port".to_string(), 8080),
        ]),
        HashMap::from([("version".to_string(), 1.0)]),
    ))
}
