//! Fixed C++ program skeleton and placeholder substitution

/// Program skeleton; each marker line is replaced by one generated block
pub const TEMPLATE: &str = r#"#include <cstdio>

using namespace std;

#define REP(i,n)   for(int i=0; i<(int)(n); i++)
#define FOR(i,b,e) for(int i=(b); i<=(int)(e); i++)

/*** CONSTS ***/

/*** DCLS ***/

void solve() {
  int ans = 0;
  printf("%d\n", ans);
}

void input() {
/*** READS ***/
}

int main() {
  input();
  solve();
  return 0;
}
"#;

pub const CONSTS_MARKER: &str = "/*** CONSTS ***/";
pub const DCLS_MARKER: &str = "/*** DCLS ***/";
pub const READS_MARKER: &str = "/*** READS ***/";

const READ_INDENT: &str = "  ";

/// Substitute the three generated blocks into [`TEMPLATE`]
///
/// Read statements are indented once; their loops are already inline.
pub fn assemble(consts: &[String], decls: &[String], reads: &[String]) -> String {
    let reads = reads
        .iter()
        .map(|s| format!("{}{}", READ_INDENT, s))
        .collect::<Vec<_>>()
        .join("\n");

    TEMPLATE
        .replacen(CONSTS_MARKER, &consts.join("\n"), 1)
        .replacen(DCLS_MARKER, &decls.join("\n"), 1)
        .replacen(READS_MARKER, &reads, 1)
}
