/// A collection of names to look up in a parsed command line.
///
/// Accepts a single name or multiple names via array/slice, so every
/// containment query takes one argument regardless of how many names are
/// being tested:
///
/// ```
/// use commandlines::Command;
///
/// let c = Command::new(["-s", "--long"]);
/// assert!(c.has_all_switches("s"));
/// assert!(c.has_all_switches(["s", "long"]));
/// ```
pub trait Needles<'a> {
    type Iter: Iterator<Item = &'a str>;
    fn needles(self) -> Self::Iter;
}

impl<'a> Needles<'a> for &'a str {
    type Iter = std::iter::Once<&'a str>;

    fn needles(self) -> Self::Iter {
        std::iter::once(self)
    }
}

impl<'a> Needles<'a> for &'a [&'a str] {
    type Iter = std::iter::Copied<std::slice::Iter<'a, &'a str>>;

    fn needles(self) -> Self::Iter {
        self.iter().copied()
    }
}

impl<'a, const N: usize> Needles<'a> for [&'a str; N] {
    type Iter = std::array::IntoIter<&'a str, N>;

    fn needles(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<'a> Needles<'a> for &'a [String] {
    type Iter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn needles(self) -> Self::Iter {
        self.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl<'a> Needles<'a> for &'a Vec<String> {
    type Iter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn needles(self) -> Self::Iter {
        self.as_slice().needles()
    }
}
