/*!
Concrete wire-protocol generators.
*/

pub mod rails_json;
