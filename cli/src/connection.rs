use friendnet_core::{find_connection, ConnectionResult, SocialGraph};
use serde_json::json;

/// Run a shortest-connection query and print the outcome.
pub fn report(graph: &SocialGraph, src: i64, dest: i64, json_output: bool) {
    let result = find_connection(graph, src, dest);
    if json_output {
        println!("{}", to_json(src, dest, &result));
    } else {
        print!("{}", render(src, dest, &result));
    }
}

fn render(src: i64, dest: i64, result: &ConnectionResult) -> String {
    match result {
        ConnectionResult::SamePerson => {
            format!("Person {src} is the same as person {dest}.\n")
        }
        ConnectionResult::OutOfRange(_) => {
            "Error: One or both person IDs do not exist in the dataset.\n".to_string()
        }
        ConnectionResult::Connected(path) => {
            let mut out = format!("There is a connection from {src} to {dest}!\n");
            for pair in path.windows(2) {
                out.push_str(&format!("{} is friends with {}\n", pair[0], pair[1]));
            }
            out
        }
        ConnectionResult::NotConnected => {
            format!("Cannot find a connection between {src} and {dest}\n")
        }
    }
}

fn to_json(src: i64, dest: i64, result: &ConnectionResult) -> serde_json::Value {
    match result {
        ConnectionResult::SamePerson => json!({
            "src": src, "dest": dest, "status": "same_person",
        }),
        ConnectionResult::OutOfRange(err) => json!({
            "src": src, "dest": dest, "status": "out_of_range", "error": err.to_string(),
        }),
        ConnectionResult::Connected(path) => json!({
            "src": src, "dest": dest, "status": "connected",
            "hops": path.len() - 1, "path": path,
        }),
        ConnectionResult::NotConnected => json!({
            "src": src, "dest": dest, "status": "not_connected",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SocialGraph {
        SocialGraph::from_edge_list(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_render_connected_walks_the_path() {
        let g = sample();
        let text = render(0, 3, &find_connection(&g, 0, 3));
        assert_eq!(
            text,
            "There is a connection from 0 to 3!\n\
             0 is friends with 1\n\
             1 is friends with 2\n\
             2 is friends with 3\n"
        );
    }

    #[test]
    fn test_render_same_person() {
        let g = sample();
        let text = render(2, 2, &find_connection(&g, 2, 2));
        assert_eq!(text, "Person 2 is the same as person 2.\n");
    }

    #[test]
    fn test_render_not_connected() {
        let g = SocialGraph::from_edge_list(3, vec![(0, 1)]).unwrap();
        let text = render(0, 2, &find_connection(&g, 0, 2));
        assert_eq!(text, "Cannot find a connection between 0 and 2\n");
    }

    #[test]
    fn test_render_out_of_range() {
        let g = sample();
        let text = render(0, 9, &find_connection(&g, 0, 9));
        assert_eq!(
            text,
            "Error: One or both person IDs do not exist in the dataset.\n"
        );
    }

    #[test]
    fn test_json_connected() {
        let g = sample();
        let value = to_json(0, 3, &find_connection(&g, 0, 3));
        assert_eq!(value["status"], "connected");
        assert_eq!(value["hops"], 3);
        assert_eq!(value["path"], json!([0, 1, 2, 3]));
    }

    #[test]
    fn test_json_not_connected() {
        let g = SocialGraph::from_edge_list(3, vec![(0, 1)]).unwrap();
        let value = to_json(0, 2, &find_connection(&g, 0, 2));
        assert_eq!(value["status"], "not_connected");
    }

    #[test]
    fn test_json_out_of_range_carries_error() {
        let g = sample();
        let value = to_json(-1, 2, &find_connection(&g, -1, 2));
        assert_eq!(value["status"], "out_of_range");
        assert!(value["error"].as_str().unwrap().contains("-1"));
    }
}
