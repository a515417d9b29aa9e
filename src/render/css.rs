use crate::style::RegionColors;

/// Style rules tying each colored region to its overlay stroke and its map fill.
///
/// Regions without a color get no rule.
pub fn region_rules(colors: &RegionColors) -> String {
    colors
        .iter()
        .map(|(region, color)| {
            format!(
                "\n.pane>svg.data .{region} {{ stroke: #{color}; }}\n.pane>svg.map path#{region}, .pane>svg.map path#{region}- {{ fill: #{color} !important; }}"
            )
        })
        .collect()
}
