use definitions::*;

/// The reserved taxon name applying a rule to every domain.
pub const WILDCARD: &str = "all";

/// Replace the wildcard rule by one rule per domain, at the position of the wildcard.
/// A domain already named by its own rule keeps that rule.
pub fn expand_rules(rules: Vec<SamplingRule>) -> Vec<SamplingRule> {
    let explicit: Vec<String> = rules
        .iter()
        .filter(|rule| rule.taxon != WILDCARD)
        .map(|rule| rule.taxon.clone())
        .collect();
    let mut expanded = Vec::with_capacity(rules.len() + DOMAINS.len());
    for rule in rules {
        if rule.taxon != WILDCARD {
            expanded.push(rule);
            continue;
        }
        for domain in DOMAINS {
            if explicit.iter().any(|taxon| taxon == domain) {
                debug!("EXPAND\t{domain}\tExplicit rule kept");
            } else if !expanded.iter().any(|r: &SamplingRule| r.taxon == domain) {
                let mut domain_rule = rule.clone();
                domain_rule.taxon = domain.to_string();
                expanded.push(domain_rule);
            }
        }
    }
    debug!("EXPAND\t{}", expanded.len());
    expanded
}
