use friendnet_core::{GraphError, PersonId, SocialGraph};
use serde_json::json;

/// Run a friend-list query and print the outcome.
pub fn report(graph: &SocialGraph, person: i64, json_output: bool) {
    let result = friend_list(graph, person);
    if json_output {
        println!("{}", to_json(person, &result));
    } else {
        print!("{}", render(person, &result));
    }
}

/// Resolve the raw id and fetch its neighbor list.
fn friend_list(graph: &SocialGraph, person: i64) -> Result<&[PersonId], GraphError> {
    let id = graph.resolve_person(person)?;
    graph.friends_of(id)
}

fn render(person: i64, result: &Result<&[PersonId], GraphError>) -> String {
    match result {
        Ok(friends) => {
            let mut out = format!("Person {} has {} friends!\n", person, friends.len());
            if !friends.is_empty() {
                let list: Vec<String> = friends.iter().map(PersonId::to_string).collect();
                out.push_str(&format!("List of friends: {}\n", list.join(" ")));
            }
            out
        }
        Err(_) => format!("Error: Person ID {} does not exist in the dataset.\n", person),
    }
}

fn to_json(person: i64, result: &Result<&[PersonId], GraphError>) -> serde_json::Value {
    match result {
        Ok(friends) => json!({
            "person": person,
            "friend_count": friends.len(),
            "friends": friends,
        }),
        Err(err) => json!({
            "person": person,
            "error": err.to_string(),
        }),
    }
}
