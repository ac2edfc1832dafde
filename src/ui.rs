pub fn render_index(date: &str, habit_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &habit_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Sora:wght@400;600;700&family=Inter:wght@400;500;600&display=swap');

    :root {
      --bg-1: #f4f1fb;
      --bg-2: #d9e9ff;
      --ink: #1f2437;
      --muted: #6d7287;
      --primary: #8b5cf6;
      --success: #10b981;
      --flame: #f59e0b;
      --danger: #ef4444;
      --card: rgba(255, 255, 255, 0.92);
      --line: rgba(31, 36, 55, 0.08);
      --shadow: 0 24px 60px rgba(76, 63, 132, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #fdf4ff 70%, #f3f6fd 100%);
      color: var(--ink);
      font-family: 'Inter', 'Segoe UI', sans-serif;
      display: flex;
      justify-content: center;
      padding: 32px 18px 56px;
    }

    .app {
      width: min(1100px, 100%);
      display: grid;
      gap: 22px;
      align-content: start;
    }

    header {
      text-align: center;
      display: grid;
      gap: 6px;
    }

    h1 {
      font-family: 'Sora', 'Trebuchet MS', sans-serif;
      font-weight: 700;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
      background: linear-gradient(90deg, var(--primary), #3b82f6, var(--success));
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1.05rem;
    }

    .meta {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
      letter-spacing: 0.04em;
    }

    .add-form {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .add-form input {
      flex: 1;
      min-width: 220px;
      padding: 14px 18px;
      font-size: 1rem;
      font-family: inherit;
      color: var(--ink);
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      box-shadow: 0 8px 20px rgba(76, 63, 132, 0.08);
    }

    .add-form input:focus {
      outline: 2px solid var(--primary);
      outline-offset: 1px;
    }

    .add-form button {
      appearance: none;
      border: none;
      border-radius: 14px;
      padding: 14px 26px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      color: white;
      background: var(--primary);
      cursor: pointer;
      box-shadow: 0 12px 24px rgba(139, 92, 246, 0.35);
      transition: transform 150ms ease;
    }

    .add-form button:active {
      transform: scale(0.97);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
      color: var(--muted);
      text-align: center;
    }

    .status[data-type='error'] {
      color: var(--danger);
    }

    .status[data-type='ok'] {
      color: var(--success);
    }

    .grid-card {
      background: var(--card);
      backdrop-filter: blur(10px);
      border: 1px solid var(--line);
      border-radius: 24px;
      box-shadow: var(--shadow);
      overflow: hidden;
    }

    .empty {
      margin: 0;
      padding: 56px 24px;
      text-align: center;
      color: var(--muted);
      font-size: 1.1rem;
    }

    .grid-scroll {
      overflow-x: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    thead th {
      padding: 14px 8px;
      border-bottom: 1px solid var(--line);
      font-weight: 600;
      color: var(--muted);
      font-size: 0.85rem;
    }

    th.name-col,
    td.habit-name {
      position: sticky;
      left: 0;
      z-index: 2;
      background: white;
      text-align: left;
      min-width: 210px;
      padding: 12px 16px;
      box-shadow: 2px 0 5px -2px rgba(31, 36, 55, 0.08);
    }

    .day-col {
      min-width: 46px;
      text-align: center;
    }

    .day-col .weekday {
      display: block;
      font-size: 0.7rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .day-col .day-number {
      display: inline-flex;
      align-items: center;
      justify-content: center;
      width: 28px;
      height: 28px;
      border-radius: 999px;
      margin-top: 4px;
      font-size: 0.85rem;
    }

    .day-col.today {
      color: var(--primary);
    }

    .day-col.today .day-number {
      background: var(--primary);
      color: white;
      box-shadow: 0 6px 14px rgba(139, 92, 246, 0.4);
    }

    tbody tr {
      border-bottom: 1px solid var(--line);
    }

    tbody tr:last-child {
      border-bottom: none;
    }

    tbody tr:hover td {
      background: rgba(139, 92, 246, 0.04);
    }

    tbody tr:hover td.habit-name {
      background: #faf8ff;
    }

    .habit-name .habit-emoji {
      font-size: 1.4rem;
      margin-right: 10px;
    }

    .habit-name .habit-label {
      font-weight: 500;
      cursor: pointer;
    }

    .habit-name .habit-label:hover {
      color: var(--primary);
    }

    .rename-input {
      font: inherit;
      font-weight: 500;
      color: var(--ink);
      background: #f1eefb;
      border: none;
      border-radius: 8px;
      padding: 4px 8px;
      width: 140px;
    }

    .rename-input:focus {
      outline: 2px solid var(--primary);
    }

    td.day-cell {
      text-align: center;
      padding: 8px 4px;
    }

    button.mark {
      appearance: none;
      border: none;
      width: 30px;
      height: 30px;
      border-radius: 999px;
      background: rgba(31, 36, 55, 0.06);
      color: transparent;
      font-size: 0.95rem;
      font-weight: 700;
      cursor: pointer;
      transition: transform 150ms ease, background 150ms ease;
    }

    button.mark:hover {
      background: rgba(139, 92, 246, 0.18);
      color: rgba(139, 92, 246, 0.6);
    }

    button.mark.done {
      background: var(--success);
      color: white;
      box-shadow: 0 6px 14px rgba(16, 185, 129, 0.35);
    }

    button.mark.done:hover {
      transform: scale(1.08);
    }

    td.streak {
      text-align: center;
      min-width: 90px;
      font-weight: 700;
      color: var(--flame);
      white-space: nowrap;
    }

    td.row-actions {
      text-align: center;
      min-width: 90px;
      white-space: nowrap;
    }

    .row-actions button {
      appearance: none;
      border: none;
      background: transparent;
      font-size: 1rem;
      padding: 6px;
      border-radius: 8px;
      cursor: pointer;
      opacity: 0.45;
      transition: opacity 120ms ease, background 120ms ease;
    }

    .row-actions button:hover {
      opacity: 1;
      background: rgba(31, 36, 55, 0.06);
    }

    .hint {
      margin: 0;
      text-align: center;
      color: var(--muted);
      font-size: 0.85rem;
    }

    @media (max-width: 600px) {
      .add-form button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Build the life you want, one day at a time.</p>
      <p class="meta"><span id="today-label">{{DATE}}</span> &middot; <span id="habit-count">{{COUNT}} tracked</span></p>
    </header>

    <form id="habit-form" class="add-form" method="post" action="/habits/add">
      <input id="habit-name" name="name" type="text" placeholder="Enter a new habit..." autocomplete="off" />
      <button type="submit">Add</button>
    </form>

    <div class="status" id="status"></div>

    <section class="grid-card">
      <p id="empty" class="empty" hidden>No habits yet. Start tracking by adding one above! &#127919;</p>
      <div class="grid-scroll" id="grid"></div>
    </section>

    <p class="hint">Days are the current month up to today, kept per calendar day. Click a habit's name to rename it.</p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const gridEl = document.getElementById('grid');
    const emptyEl = document.getElementById('empty');
    const formEl = document.getElementById('habit-form');
    const nameEl = document.getElementById('habit-name');
    const countEl = document.getElementById('habit-count');
    const todayEl = document.getElementById('today-label');

    let hasRenderedGrid = false;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flashStatus = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const pad = (value) => String(value).padStart(2, '0');

    // Keys come from local date parts, matching the server's calendar-day
    // policy, so a toggle just before midnight lands on the visible day.
    const localDayKey = (date) =>
      `${date.getFullYear()}-${pad(date.getMonth() + 1)}-${pad(date.getDate())}`;

    const monthDaysUpToToday = () => {
      const now = new Date();
      const days = [];
      const cursor = new Date(now.getFullYear(), now.getMonth(), 1);
      while (cursor.getMonth() === now.getMonth() && cursor <= now) {
        days.push(new Date(cursor));
        cursor.setDate(cursor.getDate() + 1);
      }
      return days;
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const jsonBody = (payload) => ({
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(payload)
    });

    const loadHabits = async () => {
      render(await api('/api/habits'));
    };

    const addHabit = async (name) => {
      await api('/api/habits', { method: 'POST', ...jsonBody({ name }) });
      nameEl.value = '';
      await loadHabits();
      flashStatus('Habit added');
    };

    const toggleDay = async (id, key) => {
      await api(`/api/habits/${id}/toggle`, { method: 'POST', ...jsonBody({ date: key }) });
      await loadHabits();
      flashStatus('Saved');
    };

    const renameHabit = async (id, name) => {
      await api(`/api/habits/${id}`, { method: 'PATCH', ...jsonBody({ name }) });
      flashStatus('Renamed');
    };

    const removeHabit = async (id) => {
      await api(`/api/habits/${id}`, { method: 'DELETE' });
      await loadHabits();
      flashStatus('Habit deleted');
    };

    const headerCell = (label, className) => {
      const th = document.createElement('th');
      if (className) {
        th.className = className;
      }
      th.textContent = label;
      return th;
    };

    const startRename = (habit, label) => {
      const input = document.createElement('input');
      input.type = 'text';
      input.className = 'rename-input';
      input.value = habit.name;

      let done = false;
      const finish = async (save) => {
        if (done) {
          return;
        }
        done = true;
        const next = input.value.trim();
        if (save && next && next !== habit.name) {
          try {
            await renameHabit(habit.id, next);
          } catch (err) {
            setStatus(err.message, 'error');
          }
        }
        loadHabits().catch((err) => setStatus(err.message, 'error'));
      };

      input.addEventListener('keydown', (event) => {
        if (event.key === 'Enter') {
          finish(true);
        }
        if (event.key === 'Escape') {
          finish(false);
        }
      });
      input.addEventListener('blur', () => finish(true));

      label.replaceWith(input);
      input.focus();
      input.select();
    };

    const nameCell = (habit) => {
      const cell = document.createElement('td');
      cell.className = 'habit-name';

      const emoji = document.createElement('span');
      emoji.className = 'habit-emoji';
      emoji.textContent = habit.emoji;

      const label = document.createElement('span');
      label.className = 'habit-label';
      label.textContent = habit.name;
      label.title = 'Click to rename';
      label.addEventListener('click', () => startRename(habit, label));

      cell.append(emoji, label);
      return cell;
    };

    const render = (data) => {
      const previousScroll = gridEl.scrollLeft;
      const days = monthDaysUpToToday();

      todayEl.textContent = data.today;
      countEl.textContent = `${data.habits.length} tracked`;
      emptyEl.hidden = data.habits.length !== 0;
      gridEl.innerHTML = '';
      if (!data.habits.length) {
        return;
      }

      const table = document.createElement('table');
      const head = table.createTHead().insertRow();
      head.appendChild(headerCell('Habit', 'name-col'));
      for (const day of days) {
        const th = document.createElement('th');
        th.className = localDayKey(day) === data.today ? 'day-col today' : 'day-col';
        const weekday = document.createElement('span');
        weekday.className = 'weekday';
        weekday.textContent = day.toLocaleDateString('en-US', { weekday: 'narrow' });
        const number = document.createElement('span');
        number.className = 'day-number';
        number.textContent = day.getDate();
        th.append(weekday, number);
        head.appendChild(th);
      }
      head.appendChild(headerCell('Streak'));
      head.appendChild(headerCell(''));

      const body = table.createTBody();
      for (const habit of data.habits) {
        const row = body.insertRow();
        row.appendChild(nameCell(habit));

        for (const day of days) {
          const key = localDayKey(day);
          const cell = row.insertCell();
          cell.className = 'day-cell';
          const mark = document.createElement('button');
          mark.type = 'button';
          mark.className = habit.completedDates.includes(key) ? 'mark done' : 'mark';
          mark.textContent = '✓';
          mark.addEventListener('click', () =>
            toggleDay(habit.id, key).catch((err) => setStatus(err.message, 'error'))
          );
          cell.appendChild(mark);
        }

        const streak = row.insertCell();
        streak.className = 'streak';
        streak.textContent = `\u{1F525} ${habit.streak}`;
        streak.title = `${habit.total} day${habit.total === 1 ? '' : 's'} total`;

        const actions = row.insertCell();
        actions.className = 'row-actions';
        const rename = document.createElement('button');
        rename.type = 'button';
        rename.textContent = '✏️';
        rename.title = 'Rename';
        rename.addEventListener('click', () => {
          const label = row.querySelector('.habit-label');
          if (label) {
            startRename(habit, label);
          }
        });
        const del = document.createElement('button');
        del.type = 'button';
        del.textContent = '\u{1F5D1}️';
        del.title = 'Delete';
        del.addEventListener('click', () =>
          removeHabit(habit.id).catch((err) => setStatus(err.message, 'error'))
        );
        actions.append(rename, del);
      }

      gridEl.appendChild(table);
      gridEl.scrollLeft = hasRenderedGrid ? previousScroll : gridEl.scrollWidth;
      hasRenderedGrid = true;
    };

    formEl.addEventListener('submit', (event) => {
      event.preventDefault();
      const name = nameEl.value.trim();
      if (!name) {
        return;
      }
      setStatus('Saving...', '');
      addHabit(name).catch((err) => setStatus(err.message, 'error'));
    });

    loadHabits().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
