use crate::application::ports::util::SegmentFilter;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSegmentFilter;

impl SegmentFilter for DefaultSegmentFilter {
    fn filter(&self, input: &str) -> String {
        slugify(input)
    }
}
