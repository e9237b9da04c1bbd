use serde_json::json;

use crate::analysis::StateScores;
use crate::charts::Figure;

pub const STATE_MAP_TITLE: &str = "Attractiveness of the each state";

/// US choropleth of state scores. The `Unknown` entry is emitted with a
/// `null` location, which Plotly leaves unplotted.
pub fn state_map(scores: &StateScores) -> Figure {
    let (locations, z): (Vec<_>, Vec<_>) = scores.iter().map(|(s, v)| (s.code(), v)).unzip();

    let trace = json!({
        "type": "choropleth",
        "locationmode": "USA-states",
        "locations": locations,
        "z": z,
        "zmin": 0.0,
        "zmax": 1.0,
        "colorscale": "Plasma",
        "colorbar": { "title": { "text": "score" } },
        "hovertemplate": "state=%{location}<br>score=%{z}<extra></extra>",
    });

    let layout = json!({
        "title": { "text": STATE_MAP_TITLE, "font": { "size": 28 } },
        "geo": { "scope": "usa" },
        "height": 800,
    });

    Figure {
        data: vec![trace],
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StateAttractivenessScorer;
    use crate::models::{JobTitleList, Posting};

    fn scores() -> StateScores {
        let postings: Vec<Posting> = (0..3)
            .map(|i| {
                let state = if i == 0 { "NY" } else { "CA" };
                Posting {
                    state: Some(state.to_string()),
                    job_title: Some("X".to_string()),
                    job_link: Some(format!("https://jobs/{i}")),
                    edu_req: None,
                }
            })
            .collect();
        let list: JobTitleList = ["X"].into_iter().collect();
        StateAttractivenessScorer::default().score(&postings, &list)
    }

    #[test]
    fn test_one_location_per_state_entry() {
        let fig = state_map(&scores());
        let trace = &fig.data[0];

        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locationmode"], "USA-states");
        assert_eq!(trace["locations"].as_array().unwrap().len(), 52);
        assert_eq!(trace["z"].as_array().unwrap().len(), 52);
    }

    #[test]
    fn test_unknown_location_is_null() {
        let fig = state_map(&scores());
        let locations = fig.data[0]["locations"].as_array().unwrap();
        assert_eq!(locations[0], "CA");
        assert!(locations[5].is_null());
    }

    #[test]
    fn test_layout_scope_and_title() {
        let fig = state_map(&scores());
        assert_eq!(fig.layout["geo"]["scope"], "usa");
        assert_eq!(fig.layout["title"]["font"]["size"], 28);
        assert_eq!(fig.layout["height"], 800);
        assert_eq!(fig.title(), STATE_MAP_TITLE);
    }
}
