//! Dashboard page shell
//!
//! A static HTML document. On load the script fetches `/_layout`, builds
//! the controls and chart placeholders from it, then asks `/_update` for
//! every chart. Each later control change posts only that control's id as
//! `changed`, and the server answers with the charts bound to it.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>SpaceX Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:0;padding:16px}
.control{width:50%;margin:auto}
.control select,.control input[type=search]{width:100%;padding:6px;box-sizing:border-box}
.slider{position:relative;display:flex;gap:8px;align-items:center}
.slider input[type=range]{flex:1}
.marks{display:flex;justify-content:space-between;font-size:12px;color:#666}
.range-value{text-align:center;font-size:13px;color:#333}
.graph{min-height:450px}
#error{color:#b00020;text-align:center}
</style>
</head>
<body>
<div id="app"></div>
<p id="error"></p>
<script>
(function () {
  const app = document.getElementById('app');
  const errorBox = document.getElementById('error');
  const inputs = {};
  let pending = Promise.resolve();

  function heading(c) {
    const h = document.createElement('h1');
    h.textContent = c.text;
    h.style.textAlign = c.style.textAlign;
    h.style.color = c.style.color;
    h.style.fontSize = c.style.fontSize + 'px';
    return h;
  }

  function dropdown(c) {
    const wrap = document.createElement('div');
    wrap.className = 'control';
    const select = document.createElement('select');
    select.id = c.id;
    const search = document.createElement('input');
    search.type = 'search';
    search.placeholder = c.placeholder;

    function fill(filter) {
      const current = JSON.stringify(inputs[c.id]);
      let hasCurrent = false;
      select.innerHTML = '';
      c.options.forEach(function (opt, i) {
        if (filter && opt.label.toLowerCase().indexOf(filter) < 0) return;
        const o = document.createElement('option');
        o.value = String(i);
        o.textContent = opt.label;
        if (JSON.stringify(opt.value) === current) {
          o.selected = true;
          hasCurrent = true;
        }
        select.appendChild(o);
      });
      // Keep every visible match pickable when the current value is filtered out
      if (!hasCurrent) {
        const hint = document.createElement('option');
        hint.value = '';
        hint.textContent = c.placeholder;
        hint.disabled = true;
        hint.selected = true;
        select.insertBefore(hint, select.firstChild);
      }
    }

    inputs[c.id] = c.value;
    if (c.searchable) {
      search.addEventListener('input', function () { fill(search.value.trim().toLowerCase()); });
      wrap.appendChild(search);
    }
    fill('');
    select.addEventListener('change', function () {
      if (select.value === '') return;
      inputs[c.id] = c.options[Number(select.value)].value;
      update([c.id]);
    });
    wrap.appendChild(select);
    return wrap;
  }

  function rangeSlider(c) {
    const wrap = document.createElement('div');
    wrap.className = 'control';
    const row = document.createElement('div');
    row.className = 'slider';
    const label = document.createElement('div');
    label.className = 'range-value';
    inputs[c.id] = c.value.slice();

    function show() { label.textContent = inputs[c.id][0] + ' - ' + inputs[c.id][1] + ' kg'; }

    [0, 1].forEach(function (end) {
      const r = document.createElement('input');
      r.type = 'range';
      r.min = c.min;
      r.max = c.max;
      r.step = c.step;
      r.value = c.value[end];
      r.addEventListener('change', function () {
        inputs[c.id][end] = Number(r.value);
        show();
        update([c.id]);
      });
      row.appendChild(r);
    });

    const marks = document.createElement('div');
    marks.className = 'marks';
    Object.keys(c.marks).sort(function (a, b) { return Number(a) - Number(b); }).forEach(function (k) {
      const m = document.createElement('span');
      m.textContent = c.marks[k];
      marks.appendChild(m);
    });

    show();
    wrap.appendChild(row);
    wrap.appendChild(marks);
    wrap.appendChild(label);
    return wrap;
  }

  function graph(c) {
    const div = document.createElement('div');
    div.id = c.id;
    div.className = 'graph';
    return div;
  }

  function paragraph(c) {
    const p = document.createElement('p');
    p.textContent = c.text;
    return p;
  }

  const builders = {
    heading: heading,
    dropdown: dropdown,
    range_slider: rangeSlider,
    graph: graph,
    paragraph: paragraph,
    break: function () { return document.createElement('br'); }
  };

  function update(changed) {
    const body = JSON.stringify({ changed: changed, inputs: inputs });
    pending = pending.then(function () {
      return fetch('/_update', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: body
      }).then(function (res) {
        if (!res.ok) throw new Error('update failed: ' + res.status);
        return res.json();
      }).then(function (res) {
        errorBox.textContent = '';
        Object.keys(res.outputs).forEach(function (id) {
          const fig = res.outputs[id];
          Plotly.react(id, fig.data, fig.layout);
        });
      }).catch(function (err) { errorBox.textContent = err.message; });
    });
  }

  fetch('/_layout').then(function (res) { return res.json(); }).then(function (layout) {
    document.title = layout.title;
    layout.children.forEach(function (c) {
      const build = builders[c.component];
      if (build) app.appendChild(build(c));
    });
    update([]);
  }).catch(function (err) { errorBox.textContent = err.message; });
})();
</script>
</body>
</html>
"##;
